//! Client-side port for talking to the task API.

use crate::task::{
    domain::{Task, TaskId},
    validation::TaskPayload,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task API client calls.
pub type ApiClientResult<T> = Result<T, ApiClientError>;

/// Remote task operations used by the board controller.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetches the full task collection.
    async fn list(&self) -> ApiClientResult<Vec<Task>>;

    /// Creates a task from the payload.
    async fn create(&self, payload: &TaskPayload) -> ApiClientResult<Task>;

    /// Replaces the editable fields of task `id`.
    async fn update(&self, id: &TaskId, payload: &TaskPayload) -> ApiClientResult<Task>;

    /// Deletes task `id`.
    async fn delete(&self, id: &TaskId) -> ApiClientResult<()>;
}

#[async_trait]
impl<T> TaskApi for Arc<T>
where
    T: TaskApi + ?Sized,
{
    async fn list(&self) -> ApiClientResult<Vec<Task>> {
        self.as_ref().list().await
    }

    async fn create(&self, payload: &TaskPayload) -> ApiClientResult<Task> {
        self.as_ref().create(payload).await
    }

    async fn update(&self, id: &TaskId, payload: &TaskPayload) -> ApiClientResult<Task> {
        self.as_ref().update(id, payload).await
    }

    async fn delete(&self, id: &TaskId) -> ApiClientResult<()> {
        self.as_ref().delete(id).await
    }
}

/// Errors returned by [`TaskApi`] implementations.
#[derive(Debug, Clone, Error)]
pub enum ApiClientError {
    /// The server answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-provided `error` text, when the body carried one.
        message: Option<String>,
    },

    /// The request could not be sent or the response could not be decoded.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The configured base URL cannot address task resources.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ApiClientError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns the text to show a user.
    ///
    /// Server-provided messages are passed through verbatim for 400 and 404
    /// responses; everything else gets `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                status: 400 | 404,
                message: Some(message),
            } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
