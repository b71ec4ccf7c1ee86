//! Task model shared by the queue, the input reader and the report writer.

/// Task priority; larger values are served first.
pub type Priority = i64;

/// Longest description kept for a task, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 40;

/// Unit of work stored in the agenda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub priority: Priority,
    /// At most [`MAX_DESCRIPTION_CHARS`] characters, never contains a line break.
    pub description: String,
}

impl Task {
    /// Construct a task, cutting the description at the first line break and
    /// truncating it to [`MAX_DESCRIPTION_CHARS`].
    pub fn new(priority: Priority, description: impl Into<String>) -> Self {
        let mut description = description.into();
        if let Some(end) = description.find(['\n', '\r']) {
            description.truncate(end);
        }
        if let Some((end, _)) = description.char_indices().nth(MAX_DESCRIPTION_CHARS) {
            description.truncate(end);
        }
        Self {
            priority,
            description,
        }
    }
}
