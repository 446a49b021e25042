//! Credential validation errors.

use thiserror::Error;

/// Category of a credential validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialErrorKind {
    /// A value is too short or too long.
    Length,
    /// A value has the wrong shape or characters.
    Format,
    /// The username is already registered.
    Uniqueness,
    /// The two password entries differ.
    Mismatch,
}

/// First failing credential check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Username length is outside 6..=100 characters.
    #[error("username must be between 6 and 100 characters, got {length}")]
    UsernameLength {
        /// Observed character count.
        length: usize,
    },

    /// Username has no ASCII letter.
    #[error("username must contain at least one letter")]
    UsernameMissingLetter,

    /// Username contains a character outside the allowed set.
    #[error(
        "username may only contain letters, digits, and the characters @ / _ -, found '{0}'"
    )]
    UsernameInvalidCharacter(char),

    /// Username is already registered.
    #[error("username '{0}' is already registered")]
    UsernameTaken(String),

    /// Password is shorter than 8 characters.
    #[error("password must be at least 8 characters, got {length}")]
    PasswordTooShort {
        /// Observed character count.
        length: usize,
    },

    /// Password has no ASCII uppercase letter.
    #[error("password must contain at least one uppercase letter")]
    PasswordMissingUppercase,

    /// Password has no ASCII digit.
    #[error("password must contain at least one digit")]
    PasswordMissingDigit,

    /// The two password entries differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl CredentialError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> CredentialErrorKind {
        match self {
            Self::UsernameLength { .. } | Self::PasswordTooShort { .. } => {
                CredentialErrorKind::Length
            }
            Self::UsernameMissingLetter
            | Self::UsernameInvalidCharacter(_)
            | Self::PasswordMissingUppercase
            | Self::PasswordMissingDigit => CredentialErrorKind::Format,
            Self::UsernameTaken(_) => CredentialErrorKind::Uniqueness,
            Self::PasswordMismatch => CredentialErrorKind::Mismatch,
        }
    }
}
