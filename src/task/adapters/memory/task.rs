//! In-memory store for task service tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Clones share the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    fail_writes: bool,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let state = InMemoryTaskState {
            tasks,
            fail_writes: false,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Makes subsequent [`TaskStore::save_all`] calls fail (or succeed
    /// again when `fail` is `false`).
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] if the state lock is poisoned.
    pub fn set_fail_writes(&self, fail: bool) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.fail_writes = fail;
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load_all(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.clone())
    }

    async fn save_all(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.fail_writes {
            return Err(TaskStoreError::persistence(std::io::Error::other(
                "in-memory store is configured to fail writes",
            )));
        }
        state.tasks = tasks.to_vec();
        Ok(())
    }
}
