//! Port for turning a password into a stored credential hash.

use crate::account::domain::{Password, PasswordHash};
use std::sync::Arc;
use thiserror::Error;

/// One-way password hashing.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hashes a validated password.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError`] when the hasher fails.
    fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError>;
}

/// Hashing failure.
#[derive(Debug, Clone, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(Arc<dyn std::error::Error + Send + Sync>);

impl PasswordHashError {
    /// Wraps an error raised by the hashing backend.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
