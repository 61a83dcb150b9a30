use serde::{Deserialize, Serialize};

use super::LabelError;
use crate::shared::display::{Colored, Human, Order};

/// Тип задачи по меткам `I*` и `T*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    Bug,
    Tests,
    Cleanup,
    Refactor,
    Feature,
    Docs,
    Benchmarking,
}

impl IssueType {
    pub fn try_from_label(label: &str) -> Result<Self, LabelError> {
        match label {
            "I0-panic" | "I1-security" | "I2-bug" | "I3-annoyance" => Ok(Self::Bug),
            "I4-refactor" | "I9-optimisation" => Ok(Self::Refactor),
            "I5-enhancement" => Ok(Self::Feature),
            "T10-tests" => Ok(Self::Tests),
            "T13-deprecation" | "T14-cleanup" => Ok(Self::Cleanup),
            "T11-documentation" => Ok(Self::Docs),
            "T12-benchmarks" => Ok(Self::Benchmarking),
            _ => Err(LabelError::UnknownIssueType(label.to_string())),
        }
    }

    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        labels
            .into_iter()
            .find_map(|label| Self::try_from_label(label).ok())
    }
}

impl Order for IssueType {
    fn order(&self) -> u64 {
        match self {
            Self::Bug => 0,
            Self::Tests => 1,
            Self::Cleanup => 2,
            Self::Refactor => 3,
            Self::Feature => 4,
            Self::Docs => 5,
            Self::Benchmarking => 6,
        }
    }
}

impl Human for IssueType {
    fn human(&self) -> String {
        match self {
            Self::Bug => "Fix",
            Self::Tests => "Testing",
            Self::Cleanup => "Cleanup",
            Self::Refactor => "Refactor",
            Self::Feature => "Feature",
            Self::Docs => "Docs",
            Self::Benchmarking => "Benchmarking",
        }
        .to_string()
    }
}

impl Colored for IssueType {
    fn color(&self) -> &str {
        ""
    }
}
