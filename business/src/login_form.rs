//! Login form controller.
//!
//! Validates a submit, calls the [`AuthService`], and turns the outcome into
//! user feedback and navigation.
//!
//! ## Flow
//!
//! 1. Validates that username and password are non-empty (no trimming)
//! 2. Sets the submission state to `Pending`
//! 3. Calls `AuthService::login` once with the credentials as typed
//! 4. On success, shows a welcome toast and navigates to `/chat`
//! 5. On failure, shows the error message as a destructive toast
//! 6. Sets the submission state back to `Idle`
//!
//! Steps 1-2 are [`LoginFormController::start`], step 3 is
//! [`PendingLogin::resolve`] and steps 4-6 are [`LoginFormController::finish`].
//! [`LoginFormController::submit`] runs them in order. UI code that cannot
//! await on its own thread drives the three pieces separately.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

use crate::{
    AuthError, AuthService, Credentials, LoginError, Navigator, Notifier, Route, SubmissionState,
    Toast,
};

pub const VALIDATION_ERROR_TITLE: &str = "Validation Error";
pub const LOGIN_SUCCESS_TITLE: &str = "Welcome back!";
pub const LOGIN_SUCCESS_DESCRIPTION: &str = "You have successfully logged in.";
pub const LOGIN_FAILED_TITLE: &str = "Login failed";

pub struct LoginFormController {
    auth: Arc<dyn AuthService>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    state: watch::Sender<SubmissionState>,
}

/// A login attempt that passed validation and owns the `Pending` slot.
///
/// Dropping it without calling [`LoginFormController::finish`] leaves the form
/// pending; there is no abort path.
#[must_use = "the form stays pending until the attempt is resolved and finished"]
pub struct PendingLogin {
    auth: Arc<dyn AuthService>,
    credentials: Credentials,
}

impl PendingLogin {
    /// Performs the authentication call. This is the only suspension point of
    /// a submit and it has no timeout.
    pub async fn resolve(self) -> Result<(), AuthError> {
        self.auth.login(&self.credentials).await
    }
}

impl LoginFormController {
    pub fn new(
        auth: Arc<dyn AuthService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth,
            notifier,
            navigator,
            state: watch::Sender::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    /// Receiver that observes every submission state change.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Validates and submits, then reports the outcome once the call settles.
    pub async fn submit(&self, credentials: Credentials) -> Result<(), LoginError> {
        let pending = self.start(&credentials)?;
        let result = pending.resolve().await;
        self.finish(result)
    }

    /// Validates the credentials and claims the `Pending` slot.
    ///
    /// Invalid credentials produce a "Validation Error" toast and leave the
    /// state untouched. A submit while another attempt is pending is ignored
    /// without feedback.
    pub fn start(&self, credentials: &Credentials) -> Result<PendingLogin, LoginError> {
        if let Err(err) = credentials.validate().into_result() {
            info!("LoginFormController: rejected submit, {err}");
            self.notifier
                .notify(Toast::destructive(VALIDATION_ERROR_TITLE, err.to_string()));
            return Err(err.into());
        }

        let claimed = self.state.send_if_modified(|state| {
            if state.is_pending() {
                false
            } else {
                *state = SubmissionState::Pending;
                true
            }
        });
        if !claimed {
            debug!("LoginFormController: ignoring submit while a login is pending");
            return Err(LoginError::InFlight);
        }

        info!(
            "LoginFormController: logging in user '{}'",
            credentials.username
        );
        Ok(PendingLogin {
            auth: Arc::clone(&self.auth),
            credentials: credentials.clone(),
        })
    }

    /// Reports a settled authentication call and releases the `Pending` slot.
    pub fn finish(&self, result: Result<(), AuthError>) -> Result<(), LoginError> {
        self.state.send_replace(SubmissionState::Resolved);

        let outcome = match result {
            Ok(()) => {
                info!("LoginFormController: login succeeded");
                self.notifier.notify(Toast::success(
                    LOGIN_SUCCESS_TITLE,
                    LOGIN_SUCCESS_DESCRIPTION,
                ));
                self.navigator.go_to(Route::Chat.path());
                Ok(())
            }
            Err(err) => {
                warn!("LoginFormController: login failed: {err}");
                self.notifier
                    .notify(Toast::destructive(LOGIN_FAILED_TITLE, err.message()));
                Err(LoginError::Authentication(err))
            }
        };

        self.state.send_replace(SubmissionState::Idle);
        outcome
    }
}
