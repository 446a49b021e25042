//! End-to-end task lifecycle over in-memory adapters.

use std::sync::Arc;

use crate::test_helpers::{LifecycleService, StepClock, TaggingHasher, seeded_service};
use rstest::rstest;
use taskboard::{
    account::{
        adapters::InMemoryUserStore,
        services::{SignupRequest, SignupService},
    },
    task::{
        adapters::memory::{InMemoryReferenceData, InMemoryTaskRepository},
        domain::{OwnerId, Priority, StatusKind},
        ports::ReferenceDataRepository,
        services::{
            ACCESS_DENIED_MESSAGE, ActionFeedback, CreateTaskInput, EditTaskInput, Redirect,
            TaskAction,
        },
    },
};

type Service = LifecycleService<InMemoryTaskRepository, InMemoryReferenceData>;

struct Board {
    service: Service,
    priorities: Vec<Priority>,
}

async fn board() -> eyre::Result<Board> {
    let reference = Arc::new(InMemoryReferenceData::new());
    let service = seeded_service(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&reference),
    )
    .await;
    let priorities = reference.list_priorities().await?;
    Ok(Board {
        service,
        priorities,
    })
}

impl Board {
    fn priority(&self, name: &str) -> eyre::Result<&Priority> {
        self.priorities
            .iter()
            .find(|priority| priority.name().as_str() == name)
            .ok_or_else(|| eyre::eyre!("priority {name} is not seeded"))
    }
}

async fn sign_up(name: &str) -> eyre::Result<OwnerId> {
    let accounts = SignupService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(TaggingHasher),
        Arc::new(StepClock::default()),
    );
    let user = accounts
        .register(SignupRequest::new(name, "GoodPass1", "GoodPass1"))
        .await?;
    Ok(user.owner_id())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_up_user_manages_tasks_through_completion() -> eyre::Result<()> {
    let board = board().await?;
    let owner = sign_up("planner").await?;

    let created = board
        .service
        .create(
            owner,
            CreateTaskInput::new("Draft roadmap")
                .with_priority(board.priority("High")?.id())
                .with_objectives("Agree on Q3 goals"),
        )
        .await?;
    board
        .service
        .edit(created.id(), owner, EditTaskInput::new().with_progress(50))
        .await?;
    assert_eq!(board.service.active_tasks(owner).await?.len(), 1);

    let outcome = board.service.complete(created.id(), owner).await;
    let feedback = ActionFeedback::from_outcome(TaskAction::Complete, outcome)?;

    assert_eq!(
        feedback.message(),
        "Task 'Draft roadmap' marked as completed successfully!"
    );
    assert!(board.service.active_tasks(owner).await?.is_empty());
    let completed = board.service.completed_tasks(owner).await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(
        completed.first().map(|task| task.status().kind()),
        Some(StatusKind::Completed)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn other_users_get_the_generic_denial(
    #[values(TaskAction::Edit, TaskAction::Complete, TaskAction::Delete)] action: TaskAction,
) -> eyre::Result<()> {
    let board = board().await?;
    let owner = sign_up("taskowner").await?;
    let intruder = sign_up("intruder").await?;
    let created = board
        .service
        .create(
            owner,
            CreateTaskInput::new("Private notes").with_priority(board.priority("Low")?.id()),
        )
        .await?;

    let outcome = match action {
        TaskAction::Edit => {
            board
                .service
                .edit(created.id(), intruder, EditTaskInput::new().with_name("Mine"))
                .await
        }
        TaskAction::Complete => board.service.complete(created.id(), intruder).await,
        TaskAction::Delete | TaskAction::Create => {
            board.service.delete(created.id(), intruder).await
        }
    };
    let feedback = ActionFeedback::from_outcome(action, outcome)?;

    assert_eq!(feedback.redirect(), Redirect::TaskList);
    assert_eq!(feedback.message(), ACCESS_DENIED_MESSAGE);
    assert_eq!(board.service.find(created.id(), owner).await?, created);
    Ok(())
}
