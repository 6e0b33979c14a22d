//! Individual field rules.

use crate::task::domain::{TaskDomainError, TaskStatus};
use serde_json::Value;

/// Checks that the title is a string with non-whitespace content.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTitle`] otherwise.
pub fn validate_title(title: Option<&Value>) -> Result<&str, TaskDomainError> {
    match title.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(TaskDomainError::InvalidTitle),
    }
}

/// Parses the status, accepting only the exact wire values.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidStatus`] for a missing, non-string, or
/// unknown status.
pub fn validate_status(status: Option<&Value>) -> Result<TaskStatus, TaskDomainError> {
    status
        .and_then(Value::as_str)
        .and_then(|value| TaskStatus::try_from(value).ok())
        .ok_or(TaskDomainError::InvalidStatus)
}

/// Returns the description text, treating a missing, `null`, or non-string
/// value as empty.
#[must_use]
pub fn normalize_description(description: Option<&Value>) -> &str {
    description.and_then(Value::as_str).unwrap_or_default()
}
