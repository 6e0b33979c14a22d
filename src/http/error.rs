//! Error-to-response translation and shared wire bodies.

use crate::task::services::TaskServiceError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Body text for an unknown task identifier.
pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found.";
/// Body text for any unexpected server fault.
pub const SERVER_FAULT_MESSAGE: &str = "Something went wrong on the server.";
/// Body text for a request body that is not a JSON object.
pub const MALFORMED_BODY_MESSAGE: &str = "Request body must be a JSON object.";
/// Body text confirming a deletion.
pub const TASK_DELETED_MESSAGE: &str = "Task deleted successfully.";

/// `{"error": ...}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
}

/// `{"message": ...}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable confirmation.
    pub message: String,
}

/// Errors produced while handling an API request.
///
/// | Variant | Status |
/// |---|---|
/// | validation failure | 400 |
/// | malformed body | 400 |
/// | unknown task | 404 |
/// | store failure | 500, generic body |
#[derive(Debug, Error)]
pub enum ApiError {
    /// The task service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
    /// The request body could not be read as a JSON object.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Service(TaskServiceError::Validation(_)) | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(TaskServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(TaskServiceError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Service(TaskServiceError::Validation(err)) => err.to_string(),
            Self::Service(TaskServiceError::NotFound(_)) => TASK_NOT_FOUND_MESSAGE.to_owned(),
            Self::Service(TaskServiceError::Store(err)) => {
                error!(error = %err, "task store failure");
                SERVER_FAULT_MESSAGE.to_owned()
            }
            Self::MalformedBody(rejection) => {
                debug!(error = %rejection, "request body rejected");
                MALFORMED_BODY_MESSAGE.to_owned()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
