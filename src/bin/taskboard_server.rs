//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! PORT=3000 TASKS_DATA_PATH=tasks.json taskboard-server
//! ```
//!
//! See [`taskboard::config`] for every supported variable. The server runs
//! until it receives Ctrl-C.

use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::{
    config::ServerConfig,
    http::router,
    task::{adapters::file::JsonFileTaskStore, services::TaskService},
    telemetry::init_tracing,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::from_env();
    init_tracing(config.log_json)?;
    for issue in config.issues() {
        warn!(variable = issue.variable, "{issue}");
    }

    let store = JsonFileTaskStore::new(config.data_path.clone());
    let service = TaskService::new(Arc::new(store), Arc::new(DefaultClock));
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(
        address = %listener.local_addr()?,
        data_path = %config.data_path,
        "task server listening"
    );

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("task server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
