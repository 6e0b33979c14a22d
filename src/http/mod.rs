//! HTTP API over the task service.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `GET` | `/tasks` | 200, JSON array of tasks |
//! | `GET` | `/tasks/{id}` | 200, task |
//! | `POST` | `/tasks` | 201, created task |
//! | `PUT` | `/tasks/{id}` | 200, updated task |
//! | `DELETE` | `/tasks/{id}` | 200, confirmation message |
//!
//! Failures are JSON objects with a single `error` field; see [`ApiError`]
//! for the status mapping.

mod error;
mod handlers;
mod middleware;

pub use error::{
    ApiError, ErrorBody, MALFORMED_BODY_MESSAGE, MessageBody, SERVER_FAULT_MESSAGE,
    TASK_DELETED_MESSAGE, TASK_NOT_FOUND_MESSAGE,
};

use crate::task::{ports::TaskStore, services::TaskService};
use axum::{Router, middleware::from_fn, routing::get};
use mockable::Clock;

/// Builds the task API router around `service`.
///
/// Every route is wrapped in request logging and permissive cross-origin
/// headers.
pub fn router<S, C>(service: TaskService<S, C>) -> Router
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<S, C>).post(handlers::create_task::<S, C>),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<S, C>)
                .put(handlers::update_task::<S, C>)
                .delete(handlers::delete_task::<S, C>),
        )
        .layer(from_fn(middleware::cors))
        .layer(from_fn(middleware::request_logging))
        .with_state(service)
}
