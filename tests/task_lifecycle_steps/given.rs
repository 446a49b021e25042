//! Given steps for task lifecycle BDD scenarios.

use std::sync::Arc;

use super::world::{TaskBoardWorld, run_async};
use crate::test_helpers::seeded_service;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository, domain::OwnerId, ports::ReferenceDataRepository,
    services::CreateTaskInput,
};

#[given("a seeded task board")]
fn seeded_task_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let service = run_async(seeded_service(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&world.reference),
    ));
    world.priorities =
        run_async(world.reference.list_priorities()).wrap_err("list seeded priorities")?;
    world.service = Some(service);
    Ok(())
}

#[given(r#"a user "{name}""#)]
fn a_user(world: &mut TaskBoardWorld, name: String) {
    world
        .users
        .insert(name, OwnerId::from_uuid(uuid::Uuid::new_v4()));
}

#[given(r#""{user}" has a task named "{task}" with priority "{priority}""#)]
fn user_has_task(
    world: &mut TaskBoardWorld,
    user: String,
    task: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let owner = world.user(&user)?;
    let input = CreateTaskInput::new(task).with_priority(world.priority(&priority)?.id());
    let created = run_async(world.service()?.create(owner, input))
        .wrap_err("create task for scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}
