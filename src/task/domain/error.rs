//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task content.
///
/// The display strings are user-facing and are returned verbatim by the
/// HTTP layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is missing, not text, or empty after trimming.
    #[error("Title is required and must be a non-empty string.")]
    InvalidTitle,

    /// The status is not one of the supported values.
    #[error("Status must be one of: pending, in-progress, done.")]
    InvalidStatus,
}

/// Error returned while parsing a task status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
