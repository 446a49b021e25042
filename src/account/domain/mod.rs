//! Domain model for account credentials.

mod credentials;
mod error;
mod user;

pub use credentials::{Password, Username, validate_password, validate_passwords};
pub use error::{CredentialError, CredentialErrorKind};
pub use user::{NewUser, PasswordHash, User, UserId};
