use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::aggregate::{IssueRecord, IssueRow};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("issue snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Набор задач, отрендеренный в страницу вместе с моментом выгрузки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSnapshot {
    #[serde(default)]
    pub issues: Vec<IssueRecord>,
    /// Unix-время выгрузки, секунды
    #[serde(default)]
    pub last_updated: Option<i64>,
}

impl IssueSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Сколько прошло с выгрузки. `None`, если время неизвестно или в будущем.
    pub fn since_last_update(&self, now_s: i64) -> Option<Duration> {
        let elapsed = now_s.checked_sub(self.last_updated?)?;
        u64::try_from(elapsed).ok().map(Duration::from_secs)
    }

    pub fn rows(&self) -> Vec<IssueRow> {
        self.issues.iter().cloned().map(IssueRow::from).collect()
    }
}
