//! Store port for whole-collection task persistence.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Durable storage for the complete, insertion-ordered task collection.
///
/// The collection is always read and written as one unit. Implementations
/// may keep an index internally, but callers only ever see the full ordered
/// sequence.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads every stored task in insertion order.
    ///
    /// Missing or unreadable backing storage yields an empty collection so
    /// that a first run starts cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] only when the adapter cannot
    /// reach its storage at all.
    async fn load_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Replaces the stored collection with `tasks`.
    ///
    /// The write is complete once this returns `Ok`; a subsequent
    /// [`TaskStore::load_all`] never observes a partial write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the write fails.
    async fn save_all(&self, tasks: &[Task]) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
