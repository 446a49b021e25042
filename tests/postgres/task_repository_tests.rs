//! `PostgreSQL` task and reference data adapter tests.

use std::sync::Arc;

use crate::postgres::helpers::{BoxError, IsolatedSchema};
use crate::test_helpers::{StepClock, TaggingHasher, seeded_service};
use chrono::{DateTime, TimeZone, Utc};
use rstest::rstest;
use taskboard::account::{
    adapters::PostgresUserStore,
    services::{SignupRequest, SignupService},
};
use taskboard::task::{
    adapters::postgres::{PostgresReferenceData, PostgresTaskRepository},
    domain::{OwnerId, Priority, PriorityName, StatusKind, StatusName},
    ports::{ReferenceDataError, ReferenceDataRepository, TaskRepository, TaskRepositoryError},
    services::{CreateTaskInput, EditTaskInput, TaskLifecycleError},
};

struct Fixture {
    schema: IsolatedSchema,
    reference: Arc<PostgresReferenceData>,
    repository: Arc<PostgresTaskRepository>,
}

fn fixture() -> Result<Option<Fixture>, BoxError> {
    let Some(schema) = IsolatedSchema::create()? else {
        return Ok(None);
    };
    let reference = Arc::new(PostgresReferenceData::new(schema.pool()));
    let repository = Arc::new(PostgresTaskRepository::new(schema.pool()));
    Ok(Some(Fixture {
        schema,
        reference,
        repository,
    }))
}

async fn register_owner(schema: &IsolatedSchema, username: &str) -> Result<OwnerId, BoxError> {
    let accounts = SignupService::new(
        Arc::new(PostgresUserStore::new(schema.pool())),
        Arc::new(TaggingHasher),
        Arc::new(StepClock::default()),
    );
    let user = accounts
        .register(SignupRequest::new(username, "GoodPass1", "GoodPass1"))
        .await?;
    Ok(user.owner_id())
}

fn march_first() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_round_trips_through_postgres() -> Result<(), BoxError> {
    let Some(ctx) = fixture()? else {
        return Ok(());
    };
    let service = seeded_service(Arc::clone(&ctx.repository), Arc::clone(&ctx.reference)).await;
    let priorities = ctx.reference.list_priorities().await?;
    let high = priorities
        .iter()
        .find(|priority| priority.level() == 3)
        .ok_or("high priority missing")?;
    let owner = register_owner(&ctx.schema, "pgowner").await?;

    let created = service
        .create(
            owner,
            CreateTaskInput::new("Persisted task")
                .with_priority(high.id())
                .with_description("Stored in PostgreSQL"),
        )
        .await?;
    let fetched = ctx.repository.find_by_id(created.id()).await?;
    assert_eq!(fetched.as_ref(), Some(&created));

    service
        .edit(created.id(), owner, EditTaskInput::new().with_progress(30))
        .await?;
    let completed = service.complete(created.id(), owner).await?;
    assert_eq!(completed.status().kind(), StatusKind::Completed);

    assert!(service.active_tasks(owner).await?.is_empty());
    assert_eq!(service.completed_tasks(owner).await?, vec![completed]);

    service.delete(created.id(), owner).await?;
    let err = service
        .find(created.id(), owner)
        .await
        .expect_err("deleted task should be gone");
    assert!(matches!(err, TaskLifecycleError::NotFound(_)));
    drop(ctx.schema);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_reference_names_are_rejected() -> Result<(), BoxError> {
    let Some(ctx) = fixture()? else {
        return Ok(());
    };
    let name = PriorityName::new("Urgent")?;
    ctx.reference
        .store_priority(&Priority::new(4, name.clone()))
        .await?;

    let result = ctx.reference.store_priority(&Priority::new(5, name)).await;

    assert!(matches!(
        result,
        Err(ReferenceDataError::DuplicatePriorityName(_))
    ));
    assert_eq!(
        ctx.reference
            .find_status_by_name(&StatusName::completed())
            .await?,
        None
    );
    Ok(())
}

#[rstest]
#[case::full_progress_without_date(100, None)]
#[case::dated_with_partial_progress(60, Some(march_first()))]
#[tokio::test(flavor = "multi_thread")]
async fn completed_listing_filters_half_finished_rows(
    #[case] progress: i64,
    #[case] completion_date: Option<DateTime<Utc>>,
) -> Result<(), BoxError> {
    let Some(ctx) = fixture()? else {
        return Ok(());
    };
    let service = seeded_service(Arc::clone(&ctx.repository), Arc::clone(&ctx.reference)).await;
    let owner = register_owner(&ctx.schema, "halfdone").await?;
    let priority = ctx
        .reference
        .list_priorities()
        .await?
        .into_iter()
        .next()
        .ok_or("no priorities seeded")?;
    let completed_status = ctx
        .reference
        .find_status_by_name(&StatusName::completed())
        .await?
        .ok_or("completed status missing")?;

    let finished = service
        .create(owner, CreateTaskInput::new("Finished").with_priority(priority.id()))
        .await?;
    let finished = service.complete(finished.id(), owner).await?;
    let half_finished = service
        .create(owner, CreateTaskInput::new("Half finished").with_priority(priority.id()))
        .await?;
    service
        .edit(
            half_finished.id(),
            owner,
            EditTaskInput::new()
                .with_status(completed_status.id())
                .with_progress(progress)
                .with_completion_date(completion_date),
        )
        .await?;

    assert_eq!(service.completed_tasks(owner).await?, vec![finished]);
    assert!(service.active_tasks(owner).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_owner_is_an_integrity_error() -> Result<(), BoxError> {
    let Some(ctx) = fixture()? else {
        return Ok(());
    };
    let service = seeded_service(Arc::clone(&ctx.repository), Arc::clone(&ctx.reference)).await;
    let priority = ctx
        .reference
        .list_priorities()
        .await?
        .into_iter()
        .next()
        .ok_or("no priorities seeded")?;

    let result = service
        .create(
            OwnerId::from_uuid(uuid::Uuid::new_v4()),
            CreateTaskInput::new("Orphan").with_priority(priority.id()),
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(TaskRepositoryError::Integrity(_)))
    ));
    Ok(())
}
