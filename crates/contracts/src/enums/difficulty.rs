use serde::{Deserialize, Serialize};

use super::LabelError;
use crate::shared::display::{Colored, Human, Order};

/// Оценка сложности задачи по меткам `D*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Difficult,
    Involved,
}

impl Difficulty {
    /// Парсинг из метки репозитория
    pub fn try_from_label(label: &str) -> Result<Self, LabelError> {
        match label {
            "D0-easy" => Ok(Self::Easy),
            "D1-medium" => Ok(Self::Medium),
            "D2-substantial" => Ok(Self::Difficult),
            "D3-involved" => Ok(Self::Involved),
            _ => Err(LabelError::UnknownDifficulty(label.to_string())),
        }
    }

    /// Первая распознанная метка сложности из списка
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        labels
            .into_iter()
            .find_map(|label| Self::try_from_label(label).ok())
    }

    pub fn all() -> [Difficulty; 4] {
        [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Difficult,
            Difficulty::Involved,
        ]
    }
}

impl Order for Difficulty {
    fn order(&self) -> u64 {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Difficult => 2,
            Self::Involved => 3,
        }
    }
}

// Displayed names sit one notch below the label names: "D1-medium" reads "Easy".
impl Human for Difficulty {
    fn human(&self) -> String {
        match self {
            Self::Easy => "Trivial",
            Self::Medium => "Easy",
            Self::Difficult => "Difficult",
            Self::Involved => "Hard",
        }
        .to_string()
    }
}

impl Colored for Difficulty {
    fn color(&self) -> &str {
        match self {
            Self::Easy => "green",
            Self::Medium => "orange",
            Self::Difficult => "yellow",
            Self::Involved => "red",
        }
    }
}
