//! Given steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::validation::TaskPayload;

#[given("a task file that does not exist yet")]
fn task_file_missing(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    if world.store_path.exists() {
        return Err(eyre::eyre!("task file {} already exists", world.store_path));
    }
    Ok(())
}

#[given(r#"a task titled "{title}" with status "{status}" exists"#)]
fn task_exists(
    world: &mut TaskCrudWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(&TaskPayload::new(title, status)))
        .wrap_err("create task for scenario setup")?;
    world.original_task = Some(created.clone());
    world.last_task = Some(created);
    Ok(())
}
