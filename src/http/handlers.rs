//! Route handlers.

use super::{ApiError, MessageBody, TASK_DELETED_MESSAGE};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskStore,
    services::TaskService,
    validation::TaskPayload,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;

type Service<S, C> = State<TaskService<S, C>>;

pub(super) async fn list_tasks<S, C>(
    State(service): Service<S, C>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    Ok(Json(service.list().await?))
}

pub(super) async fn get_task<S, C>(
    State(service): Service<S, C>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    Ok(Json(service.get(&TaskId::from(id)).await?))
}

pub(super) async fn create_task<S, C>(
    State(service): Service<S, C>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let task = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub(super) async fn update_task<S, C>(
    State(service): Service<S, C>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    Ok(Json(service.update(&TaskId::from(id), &body).await?))
}

pub(super) async fn delete_task<S, C>(
    State(service): Service<S, C>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    service.delete(&TaskId::from(id)).await?;
    Ok(Json(MessageBody {
        message: TASK_DELETED_MESSAGE.to_owned(),
    }))
}
