use thiserror::Error;

/// Ошибка разбора метки GitHub в одно из перечислений таксономии
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("Unknown difficulty label: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown issue type label: {0}")]
    UnknownIssueType(String),
}
