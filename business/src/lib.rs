//! Login interaction core for the chatdesk client.
//!
//! Holds the credential model, the validation rule, the capability traits the
//! login form depends on, and the [`LoginFormController`] state machine. Nothing
//! in this crate knows about egui.

mod auth;
mod config;
mod credentials;
mod error;
mod http_auth;
mod login_form;
mod notify;
mod route;
mod submission;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use auth::{AuthService, AuthStatus};
pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use credentials::{Credentials, ValidationResult, validate};
pub use error::{AuthError, ConfigError, LoginError, ValidationError};
pub use http_auth::{HttpAuthService, LoginResponse};
pub use login_form::{
    LOGIN_FAILED_TITLE, LOGIN_SUCCESS_DESCRIPTION, LOGIN_SUCCESS_TITLE, LoginFormController,
    PendingLogin, VALIDATION_ERROR_TITLE,
};
pub use notify::{Notifier, Toast, ToastVariant};
pub use route::{Navigator, Route};
pub use submission::{SIGN_IN_LABEL, SIGNING_IN_LABEL, SubmissionState};
