//! Username and password value types with their format rules.

use super::CredentialError;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

const MIN_USERNAME_LENGTH: usize = 6;
const MAX_USERNAME_LENGTH: usize = 100;
const MIN_PASSWORD_LENGTH: usize = 8;

/// Username that passed the format checks.
///
/// Uniqueness is not a property of the value; it is checked against the
/// user store by the credential validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validates the format of a candidate username.
    ///
    /// Checks run in order and only the first failure is reported: length
    /// between 6 and 100 characters, at least one ASCII letter, and only
    /// characters from `[A-Za-z0-9@/_-]`. The value is kept unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::UsernameLength`],
    /// [`CredentialError::UsernameMissingLetter`], or
    /// [`CredentialError::UsernameInvalidCharacter`].
    pub fn new(candidate: impl Into<String>) -> Result<Self, CredentialError> {
        let value = candidate.into();
        let length = value.chars().count();
        if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
            return Err(CredentialError::UsernameLength { length });
        }
        if !value.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(CredentialError::UsernameMissingLetter);
        }
        if let Some(invalid) = value.chars().find(|c| !is_username_char(*c)) {
            return Err(CredentialError::UsernameInvalidCharacter(invalid));
        }
        Ok(Self(value))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '/' | '_' | '-')
}

impl TryFrom<String> for Username {
    type Error = CredentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plain-text password that passed the strength checks.
///
/// The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Returns the plain-text password for hashing.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Validates the strength of a single password.
///
/// Checks run in order: at least 8 characters, at least one ASCII uppercase
/// letter, at least one decimal digit. Any Unicode decimal digit counts, not
/// only `0-9`.
///
/// # Errors
///
/// Returns [`CredentialError::PasswordTooShort`],
/// [`CredentialError::PasswordMissingUppercase`], or
/// [`CredentialError::PasswordMissingDigit`].
pub fn validate_password(candidate: &str) -> Result<Password, CredentialError> {
    let length = candidate.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(CredentialError::PasswordTooShort { length });
    }
    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(CredentialError::PasswordMissingUppercase);
    }
    if !candidate.chars().any(is_decimal_digit) {
        return Err(CredentialError::PasswordMissingDigit);
    }
    Ok(Password(candidate.to_owned()))
}

fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Validates a password entered twice.
///
/// The entries must match before any strength check runs.
///
/// # Errors
///
/// Returns [`CredentialError::PasswordMismatch`] when the entries differ,
/// otherwise any error from [`validate_password`].
pub fn validate_passwords(first: &str, second: &str) -> Result<Password, CredentialError> {
    if first != second {
        return Err(CredentialError::PasswordMismatch);
    }
    validate_password(first)
}
