//! Error types for alarm operations

use thiserror::Error;

/// Errors from engine operations invoked by the interaction loop
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlarmError {
    #[error("no alarm exists with id {id}")]
    NotFound { id: u64 },

    #[error("alarm has reached the maximum of {max} snoozes")]
    SnoozeLimit { max: u8 },

    #[error("invalid alarm number {index} (have {count})")]
    InvalidIndex { index: usize, count: usize },
}
