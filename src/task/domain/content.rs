//! Validated user-editable task fields.

use super::{TaskDomainError, TaskStatus};

/// The user-editable part of a task: title, description, and status.
///
/// Construction trims the title and description and rejects a blank title,
/// so every value of this type satisfies the persisted-title invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent {
    title: String,
    description: String,
    status: TaskStatus,
}

impl TaskContent {
    /// Creates validated task content.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: &str,
        description: &str,
        status: TaskStatus,
    ) -> Result<Self, TaskDomainError> {
        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(TaskDomainError::InvalidTitle);
        }
        Ok(Self {
            title: trimmed_title.to_owned(),
            description: description.trim().to_owned(),
            status,
        })
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    pub(super) fn into_parts(self) -> (String, String, TaskStatus) {
        (self.title, self.description, self.status)
    }
}
