//! Recording fakes for the three capabilities the login form talks to.
//!
//! Available to this crate's unit tests and, through the `test-utils` feature,
//! to the UI crate's tests.
//!
//! # Example
//!
//! ```ignore
//! use chatdesk_business::test_utils::{CapturedCalls, MockAuthService};
//!
//! let calls = CapturedCalls::new(MockAuthService::rejecting("Invalid credentials"));
//! let controller = calls.controller();
//! // ... submit, then assert on calls.toasts(), calls.paths(), calls.auth.calls()
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::{
    AuthError, AuthService, AuthStatus, Credentials, LoginFormController, Navigator, Notifier,
    Toast,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sender half used to settle a gated [`MockAuthService`].
pub type LoginGate = oneshot::Sender<Result<(), AuthError>>;

enum Behavior {
    /// Each call takes the next scripted result; once exhausted, calls succeed.
    Scripted(VecDeque<Result<(), AuthError>>),
    /// The first call waits on the gate. Later calls, or a dropped gate, never settle.
    Gated(Option<oneshot::Receiver<Result<(), AuthError>>>),
}

pub struct MockAuthService {
    behavior: Mutex<Behavior>,
    calls: Mutex<Vec<Credentials>>,
    status: Mutex<AuthStatus>,
}

impl MockAuthService {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            calls: Mutex::new(Vec::new()),
            status: Mutex::new(AuthStatus::NotAuthenticated),
        }
    }

    /// Every login succeeds.
    pub fn resolving() -> Self {
        Self::scripted(Vec::new())
    }

    /// The first login fails with `message`.
    pub fn rejecting(message: &str) -> Self {
        Self::scripted(vec![Err(AuthError::new(message))])
    }

    pub fn scripted(results: Vec<Result<(), AuthError>>) -> Self {
        Self::with_behavior(Behavior::Scripted(results.into()))
    }

    /// The first login waits until the returned gate is settled.
    pub fn gated() -> (Self, LoginGate) {
        let (tx, rx) = oneshot::channel();
        (Self::with_behavior(Behavior::Gated(Some(rx))), tx)
    }

    /// Credentials of every login call, in order.
    pub fn calls(&self) -> Vec<Credentials> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        lock(&self.calls).push(credentials.clone());
        *lock(&self.status) = AuthStatus::Authenticating;

        let scripted = match &mut *lock(&self.behavior) {
            Behavior::Scripted(results) => Some(results.pop_front().unwrap_or(Ok(()))),
            Behavior::Gated(_) => None,
        };
        let result = match scripted {
            Some(result) => result,
            None => {
                let gate = match &mut *lock(&self.behavior) {
                    Behavior::Gated(gate) => gate.take(),
                    Behavior::Scripted(_) => None,
                };
                match gate {
                    Some(rx) => match rx.await {
                        Ok(result) => result,
                        Err(_) => std::future::pending().await,
                    },
                    None => std::future::pending().await,
                }
            }
        };

        *lock(&self.status) = match &result {
            Ok(()) => AuthStatus::Authenticated {
                username: credentials.username.clone(),
            },
            Err(_) => AuthStatus::NotAuthenticated,
        };
        result
    }

    fn status(&self) -> AuthStatus {
        lock(&self.status).clone()
    }

    fn logout(&self) {
        *lock(&self.status) = AuthStatus::NotAuthenticated;
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        lock(&self.toasts).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        lock(&self.toasts).push(toast);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        lock(&self.paths).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        lock(&self.paths).push(path.to_owned());
    }
}

/// The three fakes wired together, kept around for assertions.
pub struct CapturedCalls {
    pub auth: Arc<MockAuthService>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl CapturedCalls {
    pub fn new(auth: MockAuthService) -> Self {
        Self {
            auth: Arc::new(auth),
            notifier: Arc::new(RecordingNotifier::default()),
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }

    pub fn controller(&self) -> LoginFormController {
        LoginFormController::new(
            Arc::clone(&self.auth) as Arc<dyn AuthService>,
            Arc::clone(&self.notifier) as Arc<dyn Notifier>,
            Arc::clone(&self.navigator) as Arc<dyn Navigator>,
        )
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.notifier.toasts()
    }

    pub fn paths(&self) -> Vec<String> {
        self.navigator.paths()
    }
}
