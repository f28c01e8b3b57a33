//! Errors returned by timer board operations

use crate::types::TimerId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("a title is required")]
    EmptyTitle,
    #[error("pick a category")]
    MissingCategory,
    #[error("a target date and time is required")]
    EmptyTarget,
    #[error("'{0}' is not a valid date and time")]
    InvalidTarget(String),
    #[error("timer {0} is still running")]
    StillRunning(TimerId),
}
