//! Signup behaviour against the in-memory user store.

use std::sync::Arc;

use crate::test_helpers::{StepClock, TaggingHasher};
use rstest::{fixture, rstest};
use taskboard::account::{
    adapters::InMemoryUserStore,
    domain::CredentialErrorKind,
    services::{SignupError, SignupRequest, SignupService},
};

type Service = SignupService<InMemoryUserStore, TaggingHasher, StepClock>;

#[fixture]
fn service() -> Service {
    SignupService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(TaggingHasher),
        Arc::new(StepClock::default()),
    )
}

#[rstest]
#[case("ab", "GoodPass1", "GoodPass1", CredentialErrorKind::Length)]
#[case("abc def", "GoodPass1", "GoodPass1", CredentialErrorKind::Format)]
#[case("abcdef", "short1A", "short1A", CredentialErrorKind::Length)]
#[case("abcdef", "longenough1", "longenough1", CredentialErrorKind::Format)]
#[case("abcdef", "LONGENOUGH", "LONGENOUGH", CredentialErrorKind::Format)]
#[case("abcdef", "A", "B", CredentialErrorKind::Mismatch)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_signups_report_the_first_failure(
    service: Service,
    #[case] username: &str,
    #[case] password: &str,
    #[case] confirmation: &str,
    #[case] expected: CredentialErrorKind,
) {
    let err = service
        .register(SignupRequest::new(username, password, confirmation))
        .await
        .expect_err("signup should fail");

    assert!(
        matches!(err, SignupError::Credential(ref inner) if inner.kind() == expected),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_signup_with_same_name_fails_uniqueness(service: Service) -> eyre::Result<()> {
    service
        .register(SignupRequest::new("existinguser", "GoodPass1", "GoodPass1"))
        .await?;

    let err = service
        .register(SignupRequest::new("existinguser", "OtherPass2", "OtherPass2"))
        .await
        .expect_err("duplicate signup should fail");

    assert!(matches!(
        err,
        SignupError::Credential(ref inner) if inner.kind() == CredentialErrorKind::Uniqueness
    ));
    Ok(())
}
