//! Application services for account registration.

mod credentials;
mod signup;

pub use credentials::{CredentialValidationError, CredentialValidator};
pub use signup::{SignupError, SignupRequest, SignupService};
