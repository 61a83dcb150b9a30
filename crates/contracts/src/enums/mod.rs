pub mod difficulty;
pub mod issue_status;
pub mod issue_type;
pub mod label_error;

pub use difficulty::Difficulty;
pub use issue_status::Status;
pub use issue_type::IssueType;
pub use label_error::LabelError;
