//! Shared helpers for integration tests that need a live task server.

use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::{
    http::router,
    task::{adapters::memory::InMemoryTaskStore, services::TaskService},
};
use tokio::{net::TcpListener, task::JoinHandle};

/// Task server running on an ephemeral local port.
///
/// The server task is aborted when the value is dropped.
pub struct TestServer {
    /// Store backing the server; clones share its state.
    pub store: InMemoryTaskStore,
    /// Collection URL, for example `http://127.0.0.1:40123/tasks`.
    pub tasks_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Starts a server over an empty in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error when the listener cannot be bound.
    pub async fn start() -> eyre::Result<Self> {
        Self::with_store(InMemoryTaskStore::new()).await
    }

    /// Starts a server over `store`.
    ///
    /// # Errors
    ///
    /// Returns an error when the listener cannot be bound.
    pub async fn with_store(store: InMemoryTaskStore) -> eyre::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        let service = TaskService::new(Arc::new(store.clone()), Arc::new(DefaultClock));
        let app = router(service);
        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!(error = %err, "test server stopped");
            }
        });

        Ok(Self {
            store,
            tasks_url: format!("http://{address}/tasks"),
            handle,
        })
    }

    /// Returns the URL of task `id`.
    #[must_use]
    pub fn task_url(&self, id: &str) -> String {
        format!("{}/{id}", self.tasks_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
