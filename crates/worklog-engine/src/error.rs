//! Error types for worklog-engine operations.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorklogError {
    #[error("Providing -monday and -friday at the same time is weird. It can't be both.")]
    ConflictingShortcuts,

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, WorklogError>;
