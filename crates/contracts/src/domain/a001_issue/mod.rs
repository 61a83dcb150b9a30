pub mod aggregate;
pub mod snapshot;

pub use aggregate::{IssueRecord, IssueRow};
pub use snapshot::{IssueSnapshot, SnapshotError};
