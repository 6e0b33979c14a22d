//! Task aggregate root.

use super::{TaskContent, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do record.
///
/// Serialises with camel-case field names and RFC 3339 timestamps, which is
/// both the HTTP wire shape and the on-disk record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: String,
    /// Stored description.
    pub description: String,
    /// Stored status.
    pub status: TaskStatus,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with both timestamps set to the current clock time.
    #[must_use]
    pub fn new(id: TaskId, content: TaskContent, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let (title, description, status) = content.into_parts();

        Self {
            id,
            title,
            description,
            status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the editable fields and refreshes `updated_at`.
    ///
    /// The identifier and creation timestamp are left untouched.
    pub fn revise(&mut self, content: TaskContent, clock: &impl Clock) {
        let (title, description, status) = content.into_parts();
        self.title = title;
        self.description = description;
        self.status = status;
        self.touch(clock);
    }

    /// Moves `updated_at` to the current clock time, never backwards.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.updated_at);
    }
}
