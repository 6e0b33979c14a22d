//! When steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::{domain::TaskId, validation::TaskPayload};

#[when(r#"a task titled "{title}" is created with status "{status}""#)]
fn create_task(world: &mut TaskCrudWorld, title: String, status: String) {
    let result = run_async(world.service.create(&TaskPayload::new(title, status)));
    world.record(result);
}

#[when(
    r#"the task is updated to title "{title}" with description "{description}" and status "{status}""#
)]
fn update_task(
    world: &mut TaskCrudWorld,
    title: String,
    description: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world
        .original_task
        .as_ref()
        .map(|task| task.id().clone())
        .ok_or_else(|| eyre::eyre!("missing original task in scenario world"))?;
    let payload = TaskPayload::new(title, status).with_description(description);
    let result = run_async(world.service.update(&id, &payload));
    world.record(result);
    Ok(())
}

#[when(r#"the task "{id}" is deleted"#)]
fn delete_task(world: &mut TaskCrudWorld, id: String) {
    if let Err(err) = run_async(world.service.delete(&TaskId::from(id))) {
        world.last_error = Some(err);
    }
}

#[when("the tasks are listed")]
fn list_tasks(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    world.listed = Some(run_async(world.service.list())?);
    Ok(())
}
