//! Error types for the queue and for the agenda program around it.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for agenda operations.
pub type Result<T> = std::result::Result<T, AgendaError>;

/// Rejections reported by [`crate::priority_queue::BoundedPriorityQueue`].
///
/// None of these leave the queue in an unusable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("invalid capacity {0}, capacity must be positive")]
    InvalidCapacity(i64),

    #[error("queue full, cannot insert")]
    QueueFull,

    #[error("no tasks pending")]
    EmptyQueue,
}

/// Errors raised while reading input, running commands or writing the report.
#[derive(Debug, Error)]
pub enum AgendaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot open {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input has no capacity line")]
    MissingCapacity,

    #[error("capacity is not an integer: {0:?}")]
    InvalidCapacityValue(String),

    #[error("input has no task table header")]
    MissingTaskTable,

    #[error("line {line}: priority is not an integer: {value:?}")]
    InvalidPriority { line: usize, value: String },

    #[error(transparent)]
    Queue(#[from] QueueError),
}
