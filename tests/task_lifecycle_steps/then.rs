//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let actual = world.last_task()?.status().name().as_str().to_owned();
    if actual != status {
        return Err(eyre::eyre!("expected status {status}, found {actual}"));
    }
    Ok(())
}

#[then("the task progress is {progress:u8}")]
fn task_progress_is(world: &TaskBoardWorld, progress: u8) -> Result<(), eyre::Report> {
    let actual = world.last_task()?.progress().value();
    if actual != progress {
        return Err(eyre::eyre!("expected progress {progress}, found {actual}"));
    }
    Ok(())
}

#[then("the task has no completion date")]
fn task_has_no_completion_date(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    match world.last_task()?.completion_date() {
        None => Ok(()),
        Some(date) => Err(eyre::eyre!("unexpected completion date {date}")),
    }
}

#[then("the task has a completion date")]
fn task_has_completion_date(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    world
        .last_task()?
        .completion_date()
        .map(|_| ())
        .ok_or_else(|| eyre::eyre!("completion date is missing"))
}

#[then(r#"the feedback message is "{message}""#)]
fn feedback_message_is(world: &TaskBoardWorld, message: String) -> Result<(), eyre::Report> {
    let feedback = world
        .last_feedback
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no feedback recorded"))?;
    if feedback.message() != message {
        return Err(eyre::eyre!(
            "expected message {message:?}, found {:?}",
            feedback.message()
        ));
    }
    Ok(())
}

#[then(r#"the active list for "{user}" has {count:usize} entries"#)]
fn active_list_size(
    world: &TaskBoardWorld,
    user: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let owner = world.user(&user)?;
    let active = run_async(world.service()?.active_tasks(owner))?;
    if active.len() != count {
        return Err(eyre::eyre!("expected {count} active tasks, found {}", active.len()));
    }
    Ok(())
}

#[then(r#"the completed list for "{user}" has {count:usize} entries"#)]
fn completed_list_size(
    world: &TaskBoardWorld,
    user: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let owner = world.user(&user)?;
    let completed = run_async(world.service()?.completed_tasks(owner))?;
    if completed.len() != count {
        return Err(eyre::eyre!(
            "expected {count} completed tasks, found {}",
            completed.len()
        ));
    }
    Ok(())
}
