//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::{ActionFeedback, CreateTaskInput, TaskAction};

#[when(r#""{user}" creates a task named "{task}" with priority "{priority}""#)]
fn user_creates_task(
    world: &mut TaskBoardWorld,
    user: String,
    task: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let owner = world.user(&user)?;
    let input = CreateTaskInput::new(task).with_priority(world.priority(&priority)?.id());
    let outcome = run_async(world.service()?.create(owner, input));
    if let Ok(ref created) = outcome {
        world.last_task = Some(created.clone());
    }
    world.last_feedback = Some(ActionFeedback::from_outcome(TaskAction::Create, outcome)?);
    Ok(())
}

#[when(r#""{user}" completes the task"#)]
fn user_completes_task(world: &mut TaskBoardWorld, user: String) -> Result<(), eyre::Report> {
    let owner = world.user(&user)?;
    let task_id = world.last_task()?.id();
    let outcome = run_async(world.service()?.complete(task_id, owner));
    if let Ok(ref completed) = outcome {
        world.last_task = Some(completed.clone());
    }
    world.last_feedback = Some(ActionFeedback::from_outcome(TaskAction::Complete, outcome)?);
    Ok(())
}

#[when(r#""{user}" deletes the task"#)]
fn user_deletes_task(world: &mut TaskBoardWorld, user: String) -> Result<(), eyre::Report> {
    let owner = world.user(&user)?;
    let task_id = world.last_task()?.id();
    let outcome = run_async(world.service()?.delete(task_id, owner));
    world.last_feedback = Some(ActionFeedback::from_outcome(TaskAction::Delete, outcome)?);
    Ok(())
}
