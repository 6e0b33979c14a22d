//! Service layer for task create, list, get, update, and delete.

use crate::task::{
    domain::{Task, TaskContent, TaskDomainError, TaskId},
    ports::{TaskStore, TaskStoreError},
    validation::{TaskPayload, validate_payload},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD orchestration service.
///
/// Every operation loads the full collection, works on it in memory, and
/// (for mutations) writes it back. Mutations hold a per-service write gate
/// for the whole read-modify-write cycle, so concurrent writers sharing one
/// service instance cannot lose each other's updates.
pub struct TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    write_gate: Arc<Mutex<()>>,
}

impl<S, C> Clone for TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            write_gate: Arc::clone(&self.write_gate),
        }
    }
}

impl<S, C> TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Validates the payload and appends a new task with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] before touching the store
    /// when the payload is invalid, or [`TaskServiceError::Store`] when
    /// persistence fails.
    pub async fn create(&self, payload: &TaskPayload) -> TaskServiceResult<Task> {
        let content = validate(payload)?;

        let _gate = self.write_gate.lock().await;
        let mut tasks = self.store.load_all().await?;
        let id = fresh_id(&tasks);
        let task = Task::new(id, content, &*self.clock);
        tasks.push(task.clone());
        self.store.save_all(&tasks).await?;

        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store cannot be read.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.store.load_all().await?)
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task matches.
    pub async fn get(&self, id: &TaskId) -> TaskServiceResult<Task> {
        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|task| task.id() == id)
            .ok_or_else(|| not_found(id))
    }

    /// Replaces the title, description, and status of an existing task.
    ///
    /// The identifier and creation timestamp are preserved; `updated_at`
    /// moves to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for an invalid payload,
    /// [`TaskServiceError::NotFound`] when no task matches, or
    /// [`TaskServiceError::Store`] when persistence fails.
    pub async fn update(&self, id: &TaskId, payload: &TaskPayload) -> TaskServiceResult<Task> {
        let content = validate(payload)?;

        let _gate = self.write_gate.lock().await;
        let mut tasks = self.store.load_all().await?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| not_found(id))?;
        task.revise(content, &*self.clock);
        let updated = task.clone();
        self.store.save_all(&tasks).await?;

        info!(task_id = %id, status = %updated.status(), "task updated");
        Ok(updated)
    }

    /// Removes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task matches, or
    /// [`TaskServiceError::Store`] when persistence fails.
    pub async fn delete(&self, id: &TaskId) -> TaskServiceResult<()> {
        let _gate = self.write_gate.lock().await;
        let mut tasks = self.store.load_all().await?;
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() == before {
            return Err(not_found(id));
        }
        self.store.save_all(&tasks).await?;

        info!(task_id = %id, "task deleted");
        Ok(())
    }
}

fn validate(payload: &TaskPayload) -> Result<TaskContent, TaskDomainError> {
    validate_payload(payload).inspect_err(|err| debug!(error = %err, "task payload rejected"))
}

fn not_found(id: &TaskId) -> TaskServiceError {
    debug!(task_id = %id, "task not found");
    TaskServiceError::NotFound(id.clone())
}

/// Generates an identifier not already present in `tasks`.
fn fresh_id(tasks: &[Task]) -> TaskId {
    loop {
        let candidate = TaskId::generate();
        if tasks.iter().all(|task| task.id() != &candidate) {
            return candidate;
        }
    }
}
