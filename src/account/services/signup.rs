//! Account registration.

use super::{CredentialValidationError, CredentialValidator};
use crate::account::{
    domain::{CredentialError, NewUser, User, Username, validate_passwords},
    ports::{PasswordHashError, PasswordHasher, UserStore, UserStoreError},
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Signup form contents.
#[derive(Clone)]
pub struct SignupRequest {
    username: String,
    password: String,
    password_confirmation: String,
}

impl SignupRequest {
    /// Creates a signup request.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Errors raised by [`SignupService::register`].
#[derive(Debug, Error)]
pub enum SignupError {
    /// A credential rule failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The username was taken between the uniqueness check and the insert.
    #[error("username '{0}' is already in use, choose another")]
    UsernameConflict(Username),

    /// The password could not be hashed.
    #[error(transparent)]
    Hashing(#[from] PasswordHashError),

    /// The user store failed.
    #[error(transparent)]
    Store(#[from] UserStoreError),
}

impl From<CredentialValidationError> for SignupError {
    fn from(err: CredentialValidationError) -> Self {
        match err {
            CredentialValidationError::Credential(inner) => Self::Credential(inner),
            CredentialValidationError::Store(inner) => Self::Store(inner),
        }
    }
}

/// Registers new accounts.
#[derive(Clone)]
pub struct SignupService<S, H, C>
where
    S: UserStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    validator: CredentialValidator<S>,
    store: Arc<S>,
    hasher: Arc<H>,
    clock: Arc<C>,
}

impl<S, H, C> SignupService<S, H, C>
where
    S: UserStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    /// Creates a signup service.
    #[must_use]
    pub fn new(store: Arc<S>, hasher: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            validator: CredentialValidator::new(Arc::clone(&store)),
            store,
            hasher,
            clock,
        }
    }

    /// Validates the request, hashes the password, and creates the user.
    ///
    /// The username is checked before the passwords. A duplicate reported
    /// by the store at insert time is not retried.
    ///
    /// # Errors
    ///
    /// Returns [`SignupError::Credential`] for the first failing rule,
    /// [`SignupError::UsernameConflict`] when the insert loses a race,
    /// [`SignupError::Hashing`] when hashing fails, and
    /// [`SignupError::Store`] for other store failures.
    #[tracing::instrument(skip_all, fields(username = %request.username))]
    pub async fn register(&self, request: SignupRequest) -> Result<User, SignupError> {
        let SignupRequest {
            username,
            password,
            password_confirmation,
        } = request;

        let valid_username = self.validator.validate_username(&username).await?;
        let valid_password = validate_passwords(&password, &password_confirmation)?;
        let password_hash = self.hasher.hash(&valid_password)?;

        let new_user = NewUser {
            username: valid_username,
            password_hash,
            created_at: self.clock.utc(),
        };
        match self.store.create(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id(), "account created");
                Ok(user)
            }
            Err(UserStoreError::DuplicateUsername(taken)) => {
                tracing::warn!(username = %taken, "username claimed concurrently");
                Err(SignupError::UsernameConflict(taken))
            }
            Err(err) => Err(err.into()),
        }
    }
}
