use thiserror::Error;

/// Local, pre-call rejection of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", Self::MISSING_CREDENTIALS)]
    MissingCredentials,
}

impl ValidationError {
    pub const MISSING_CREDENTIALS: &'static str = "Please enter both username and password.";
}

/// Failure reported by an [`AuthService`](crate::AuthService).
///
/// The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a call to [`LoginFormController::submit`](crate::LoginFormController::submit)
/// did not log the user in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Authentication(#[from] AuthError),
    #[error("a login attempt is already in progress")]
    InFlight,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
}
