//! Authentication capability.
//!
//! The login form only needs [`AuthService::login`]; the status accessors are
//! what the rest of the client (route guard, chat page) reads.

use async_trait::async_trait;

use crate::{AuthError, Credentials};

/// Result/status of authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Not authenticated yet.
    #[default]
    NotAuthenticated,
    /// Authentication in progress.
    Authenticating,
    /// Successfully authenticated.
    Authenticated {
        /// The username of the authenticated user.
        username: String,
    },
}

impl AuthStatus {
    /// Check if the user is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Check if an authentication call is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Authenticating)
    }

    /// Get the username if authenticated.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username } => Some(username.as_str()),
            _ => None,
        }
    }
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticates with the given credentials, passed through unmodified.
    ///
    /// Rejects with an [`AuthError`] whose message is fit to show the user.
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError>;

    fn status(&self) -> AuthStatus;

    fn logout(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_status_default_is_not_authenticated() {
        let status = AuthStatus::default();

        assert!(!status.is_authenticated());
        assert!(!status.is_loading());
        assert_eq!(status.username(), None);
    }

    #[test]
    fn test_auth_status_authenticated() {
        let status = AuthStatus::Authenticated {
            username: "test_user".to_owned(),
        };

        assert!(status.is_authenticated());
        assert!(!status.is_loading());
        assert_eq!(status.username(), Some("test_user"));
    }

    #[test]
    fn test_auth_status_authenticating_is_loading() {
        let status = AuthStatus::Authenticating;

        assert!(status.is_loading());
        assert!(!status.is_authenticated());
        assert_eq!(status.username(), None);
    }
}
