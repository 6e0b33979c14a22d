//! Then steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{
    adapters::file::JsonFileTaskStore,
    domain::{Task, TaskStatus},
    ports::TaskStore,
    services::TaskServiceError,
};

fn last_task(world: &TaskCrudWorld) -> Result<&Task, eyre::Report> {
    world.last_task.as_ref().ok_or_else(|| {
        eyre::eyre!(
            "missing task in scenario world (last error: {:?})",
            world.last_error
        )
    })
}

fn original_task(world: &TaskCrudWorld) -> Result<&Task, eyre::Report> {
    world
        .original_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing original task in scenario world"))
}

#[then("the task has a generated id")]
fn task_has_generated_id(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !last_task(world)?.id().as_str().is_empty(),
        "expected a non-empty id"
    );
    Ok(())
}

#[then("the task description is empty")]
fn task_description_empty(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let description = last_task(world)?.description();
    eyre::ensure!(
        description.is_empty(),
        "expected empty description, found {description:?}"
    );
    Ok(())
}

#[then("the task creation and update times are equal")]
fn task_times_equal(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let task = last_task(world)?;
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "createdAt {} differs from updatedAt {}",
        task.created_at(),
        task.updated_at()
    );
    Ok(())
}

#[then("the task keeps its id and creation time")]
fn task_keeps_identity(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let original = original_task(world)?;
    let task = last_task(world)?;
    eyre::ensure!(task.id() == original.id(), "task id changed");
    eyre::ensure!(
        task.created_at() == original.created_at(),
        "task creation time changed"
    );
    Ok(())
}

#[then("the task update time has advanced")]
fn task_update_time_advanced(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let original = original_task(world)?;
    let task = last_task(world)?;
    eyre::ensure!(
        task.updated_at() > original.updated_at(),
        "expected updatedAt after {}, found {}",
        original.updated_at(),
        task.updated_at()
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskCrudWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = last_task(world)?.status();
    eyre::ensure!(actual == expected, "expected status {expected}, found {actual}");
    Ok(())
}

#[then("the operation fails because the task was not found")]
fn operation_not_found(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskServiceError::NotFound(_)) => Ok(()),
        other => Err(eyre::eyre!("expected NotFound error, got {other:?}")),
    }
}

#[then(r#"the operation fails with message "{message}""#)]
fn operation_fails_with_message(
    world: &TaskCrudWorld,
    message: String,
) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;
    eyre::ensure!(
        err.to_string() == message,
        "expected message {message:?}, found {err}"
    );
    Ok(())
}

#[then("the listing is empty")]
fn listing_is_empty(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let listed = world
        .listed
        .as_ref()
        .ok_or_else(|| eyre::eyre!("tasks were not listed"))?;
    eyre::ensure!(listed.is_empty(), "expected no tasks, found {}", listed.len());
    Ok(())
}

#[then("the number of stored tasks is {count:usize}")]
fn stored_task_count(world: &TaskCrudWorld, count: usize) -> Result<(), eyre::Report> {
    let store = JsonFileTaskStore::new(world.store_path.clone());
    let stored = run_async(store.load_all())?;
    eyre::ensure!(
        stored.len() == count,
        "expected {count} stored tasks, found {}",
        stored.len()
    );
    Ok(())
}
