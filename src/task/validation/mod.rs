//! Input validation for task create and update requests.
//!
//! Request bodies arrive as loosely typed JSON. [`validate_payload`] gates
//! every mutation: it checks the title first, then the status, and only
//! then builds [`TaskContent`]. It has no side effects.

pub mod rules;

use crate::task::domain::{TaskContent, TaskDomainError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped create/update request body.
///
/// Fields are kept as raw JSON values so that a non-string title or status
/// is reported as a validation failure rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    /// Requested title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// Requested description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// Requested status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

impl TaskPayload {
    /// Creates a payload with a string title and status.
    #[must_use]
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            description: None,
            status: Some(Value::String(status.into())),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Value::String(description.into()));
        self
    }
}

/// Validates a request body and returns normalized task content.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTitle`] when the title is missing, not
/// a string, or blank, and [`TaskDomainError::InvalidStatus`] when the status
/// is not exactly `pending`, `in-progress`, or `done`.
pub fn validate_payload(payload: &TaskPayload) -> Result<TaskContent, TaskDomainError> {
    let title = rules::validate_title(payload.title.as_ref())?;
    let status = rules::validate_status(payload.status.as_ref())?;
    let description = rules::normalize_description(payload.description.as_ref());
    TaskContent::new(title, description, status)
}
