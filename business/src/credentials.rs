//! Login credentials and the submit-time validation rule.
//!
//! Values are kept exactly as typed. Nothing here trims, lowercases or
//! otherwise normalizes the username or password; the string the user entered
//! is the string that reaches [`AuthService::login`](crate::AuthService::login).

use std::fmt;

use serde::Serialize;

use crate::ValidationError;

/// Raw username/password pair submitted from the login form.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Username as typed.
    pub username: String,
    /// Password as typed.
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Runs the validation rule against these credentials.
    pub fn validate(&self) -> ValidationResult {
        validate(self)
    }
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of validating a [`Credentials`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: Option<&'static str>,
}

impl ValidationResult {
    const OK: Self = Self {
        valid: true,
        reason: None,
    };

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationError::MissingCredentials)
        }
    }
}

/// Both fields must be non-empty. Emptiness is checked on the raw string, so
/// a whitespace-only value counts as filled in.
pub fn validate(credentials: &Credentials) -> ValidationResult {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        ValidationResult {
            valid: false,
            reason: Some(ValidationError::MISSING_CREDENTIALS),
        }
    } else {
        ValidationResult::OK
    }
}
