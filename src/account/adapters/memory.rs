//! In-memory user store for tests and examples.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{NewUser, User, UserId, Username},
    ports::{UserStore, UserStoreError, UserStoreResult},
};

/// Thread-safe in-memory user store keyed by username.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Username, User>>>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> UserStoreError {
    UserStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists(&self, username: &Username) -> UserStoreResult<bool> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.contains_key(username))
    }

    async fn find_by_username(&self, username: &Username) -> UserStoreResult<Option<User>> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.get(username).cloned())
    }

    async fn create(&self, user: NewUser) -> UserStoreResult<User> {
        let mut users = self.users.write().map_err(lock_error)?;
        if users.contains_key(&user.username) {
            return Err(UserStoreError::DuplicateUsername(user.username));
        }
        let created = User::register(UserId::new(), user);
        users.insert(created.username().clone(), created.clone());
        Ok(created)
    }
}
