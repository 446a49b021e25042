//! Shared world state for signup BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{StepClock, TaggingHasher};
use rstest::fixture;
use taskboard::account::{
    adapters::InMemoryUserStore,
    domain::User,
    services::{SignupError, SignupService},
};

/// Signup service used by the BDD world.
pub type TestSignupService = SignupService<InMemoryUserStore, TaggingHasher, StepClock>;

/// Scenario world for signup behaviour tests.
pub struct SignupWorld {
    pub store: Arc<InMemoryUserStore>,
    pub service: TestSignupService,
    pub last_result: Option<Result<User, SignupError>>,
}

impl SignupWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryUserStore::new());
        let service = SignupService::new(
            Arc::clone(&store),
            Arc::new(TaggingHasher),
            Arc::new(StepClock::default()),
        );
        Self {
            store,
            service,
            last_result: None,
        }
    }
}

impl Default for SignupWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SignupWorld {
    SignupWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
