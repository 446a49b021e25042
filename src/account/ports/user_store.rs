//! Port for persisting registered users.

use crate::account::domain::{NewUser, User, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user store operations.
pub type UserStoreResult<T> = Result<T, UserStoreError>;

/// Storage for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns `true` when a user with this username exists.
    async fn exists(&self, username: &Username) -> UserStoreResult<bool>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &Username) -> UserStoreResult<Option<User>>;

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::DuplicateUsername`] when the username is
    /// already taken at insert time.
    async fn create(&self, user: NewUser) -> UserStoreResult<User>;
}

/// Errors returned by user store implementations.
#[derive(Debug, Clone, Error)]
pub enum UserStoreError {
    /// The username is already registered.
    #[error("duplicate username: {0}")]
    DuplicateUsername(Username),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserStoreError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
