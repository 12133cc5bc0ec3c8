//! [`AuthService`] backed by the chat backend's `/auth/login` endpoint.
//!
//! ## Flow
//!
//! 1. Sets status to `Authenticating`
//! 2. Makes HTTP POST to `/auth/login` with the credentials as JSON
//! 3. On a 2xx response, sets status to `Authenticated`
//! 4. Otherwise sets status back to `NotAuthenticated` and returns the
//!    server's message (or a status-based fallback) as the error

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::{error, info};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{AuthError, AuthService, AuthStatus, BusinessConfig, Credentials};

/// Response body of a successful login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    /// Canonical username as known by the backend.
    pub username: Option<String>,
}

/// Error body returned by the backend on failure.
#[derive(Debug, Clone, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Extracts an error message from a response, falling back to a default message.
fn extract_error_message(response_bytes: &[u8], default: &str) -> String {
    serde_json::from_slice::<ErrorResponse>(response_bytes)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or_else(|| default.to_owned())
}

#[derive(Debug)]
pub struct HttpAuthService {
    client: reqwest::Client,
    config: BusinessConfig,
    status: Mutex<AuthStatus>,
}

impl HttpAuthService {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: BusinessConfig) -> Self {
        Self {
            client,
            config,
            status: Mutex::new(AuthStatus::NotAuthenticated),
        }
    }

    fn status_lock(&self) -> MutexGuard<'_, AuthStatus> {
        // Writes are single assignments, so a poisoned lock still holds a whole value.
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_status(&self, status: AuthStatus) {
        *self.status_lock() = status;
    }

    fn fail(&self, message: String) -> AuthError {
        self.set_status(AuthStatus::NotAuthenticated);
        AuthError::new(message)
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let url = format!("{}/auth/login", self.config.api_url());
        info!("HttpAuthService: logging in user '{}'", credentials.username);

        self.set_status(AuthStatus::Authenticating);

        let response = match self.client.post(&url).json(credentials).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("HttpAuthService: Network error: {err}");
                return Err(self.fail(format!("Network error: {err}")));
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("HttpAuthService: Failed to read response body: {err}");
                return Err(self.fail(format!("Network error: {err}")));
            }
        };

        if status.is_success() {
            // An empty or unexpected body still means the backend accepted the login.
            let body = serde_json::from_slice::<LoginResponse>(&bytes).unwrap_or_default();
            let username = body
                .username
                .unwrap_or_else(|| credentials.username.clone());
            info!("HttpAuthService: login succeeded for user '{username}'");
            self.set_status(AuthStatus::Authenticated { username });
            return Ok(());
        }

        let message = if status == StatusCode::UNAUTHORIZED {
            extract_error_message(&bytes, "Invalid credentials")
        } else {
            extract_error_message(
                &bytes,
                &format!("Server error (status {})", status.as_u16()),
            )
        };
        info!("HttpAuthService: login rejected ({status}): {message}");
        Err(self.fail(message))
    }

    fn status(&self) -> AuthStatus {
        self.status_lock().clone()
    }

    fn logout(&self) {
        info!("HttpAuthService: user logged out");
        self.set_status(AuthStatus::NotAuthenticated);
    }
}
