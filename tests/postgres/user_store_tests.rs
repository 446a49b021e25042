//! `PostgreSQL` user store tests.

use std::sync::Arc;

use crate::postgres::helpers::{BoxError, IsolatedSchema};
use crate::test_helpers::{StepClock, TaggingHasher};
use chrono::Utc;
use rstest::rstest;
use taskboard::account::{
    adapters::PostgresUserStore,
    domain::{NewUser, PasswordHash, Username},
    ports::{UserStore, UserStoreError},
    services::{SignupError, SignupRequest, SignupService},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signup_persists_user() -> Result<(), BoxError> {
    let Some(schema) = IsolatedSchema::create()? else {
        return Ok(());
    };
    let store = Arc::new(PostgresUserStore::new(schema.pool()));
    let service = SignupService::new(
        Arc::clone(&store),
        Arc::new(TaggingHasher),
        Arc::new(StepClock::default()),
    );

    let user = service
        .register(SignupRequest::new("pguser1", "GoodPass1", "GoodPass1"))
        .await?;

    assert!(store.exists(user.username()).await?);
    let found = store.find_by_username(user.username()).await?;
    assert_eq!(found.map(|stored| stored.id()), Some(user.id()));

    let err = service
        .register(SignupRequest::new("pguser1", "GoodPass1", "GoodPass1"))
        .await
        .expect_err("second signup should fail");
    assert!(matches!(err, SignupError::Credential(_)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unique_violation_maps_to_duplicate_username() -> Result<(), BoxError> {
    let Some(schema) = IsolatedSchema::create()? else {
        return Ok(());
    };
    let store = PostgresUserStore::new(schema.pool());
    let new_user = || -> Result<NewUser, BoxError> {
        Ok(NewUser {
            username: Username::new("racer99")?,
            password_hash: PasswordHash::new("tagged$x"),
            created_at: Utc::now(),
        })
    };
    store.create(new_user()?).await?;

    let result = store.create(new_user()?).await;

    assert!(matches!(result, Err(UserStoreError::DuplicateUsername(_))));
    Ok(())
}
