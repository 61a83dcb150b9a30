use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, IssueType, Status};

// ============================================================================
// Raw record
// ============================================================================

/// Открытая задача в том виде, в каком она встроена в страницу
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub creator: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub assigned: bool,
    #[serde(default)]
    pub pull_request: bool,
}

// ============================================================================
// Table row
// ============================================================================

/// Строка таблицы задач: колонки Title, Difficulty, Status, Type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRow {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub creator: String,
    pub difficulty: Option<Difficulty>,
    pub status: Option<Status>,
    pub kind: Option<IssueType>,
}

impl IssueRow {
    pub const COLUMN_TITLE: usize = 0;
    pub const COLUMN_DIFFICULTY: usize = 1;
    pub const COLUMN_STATUS: usize = 2;
    pub const COLUMN_TYPE: usize = 3;

    /// Заголовки колонок в порядке отображения
    pub fn column_labels() -> [&'static str; 4] {
        ["Title", "Difficulty", "Status", "Type"]
    }
}

impl From<IssueRecord> for IssueRow {
    fn from(record: IssueRecord) -> Self {
        let labels = || record.labels.iter().map(String::as_str);
        let difficulty = Difficulty::from_labels(labels());
        let kind = IssueType::from_labels(labels());
        let status = Some(Status::derive(record.assigned, record.pull_request));

        Self {
            id: record.id,
            title: record.title,
            link: record.link,
            creator: record.creator,
            difficulty,
            status,
            kind,
        }
    }
}
