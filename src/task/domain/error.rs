//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name exceeds the storage limit.
    #[error("task name is {length} characters long, the limit is {max}")]
    TaskNameTooLong {
        /// Length of the rejected name in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// No priority was supplied for a new task.
    #[error("a priority must be selected")]
    MissingPriority,

    /// Progress is outside `0..=100`.
    #[error("progress {0} is outside the range 0-100")]
    ProgressOutOfRange(i64),

    /// A new task was requested with the completed status.
    #[error("a new task cannot start in the completed status")]
    CompletedStatusOnCreate,

    /// The priority name is empty after trimming.
    #[error("priority name must not be empty")]
    EmptyPriorityName,

    /// The priority name exceeds 10 characters.
    #[error("priority name exceeds 10 character limit: {0}")]
    PriorityNameTooLong(String),

    /// The status name is empty after trimming.
    #[error("status name must not be empty")]
    EmptyStatusName,

    /// The status name exceeds 15 characters.
    #[error("status name exceeds 15 character limit: {0}")]
    StatusNameTooLong(String),
}
