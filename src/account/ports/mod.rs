//! Port contracts for account management.

pub mod hasher;
pub mod user_store;

pub use hasher::{PasswordHashError, PasswordHasher};
pub use user_store::{UserStore, UserStoreError, UserStoreResult};

#[cfg(test)]
pub use hasher::MockPasswordHasher;
#[cfg(test)]
pub use user_store::MockUserStore;
