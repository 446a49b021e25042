//! Username checks that need the user store.

use crate::account::{
    domain::{CredentialError, CredentialErrorKind, Username},
    ports::{UserStore, UserStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while validating credentials against the store.
#[derive(Debug, Error)]
pub enum CredentialValidationError {
    /// A credential rule failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The uniqueness lookup failed.
    #[error(transparent)]
    Store(#[from] UserStoreError),
}

impl CredentialValidationError {
    /// Returns the rule category when a credential rule failed.
    #[must_use]
    pub const fn kind(&self) -> Option<CredentialErrorKind> {
        match self {
            Self::Credential(err) => Some(err.kind()),
            Self::Store(_) => None,
        }
    }
}

/// Validates usernames, including the uniqueness check.
#[derive(Clone)]
pub struct CredentialValidator<S>
where
    S: UserStore,
{
    store: Arc<S>,
}

impl<S> CredentialValidator<S>
where
    S: UserStore,
{
    /// Creates a validator backed by `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validates a candidate username.
    ///
    /// Format rules run first; the store is consulted once, and only when
    /// they pass.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError::Credential`] for the first
    /// failing rule, including [`CredentialError::UsernameTaken`], or
    /// [`CredentialValidationError::Store`] when the lookup fails.
    pub async fn validate_username(
        &self,
        candidate: &str,
    ) -> Result<Username, CredentialValidationError> {
        let username = Username::new(candidate)?;
        if self.store.exists(&username).await? {
            return Err(CredentialError::UsernameTaken(username.into()).into());
        }
        Ok(username)
    }
}
