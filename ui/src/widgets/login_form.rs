//! Login form widget.
//!
//! Renders the username/password form and drives the
//! [`LoginFormController`]. The authentication call runs on the tokio runtime;
//! its result comes back over a channel and is applied on the UI thread the
//! next time the form is drawn.

use std::time::Duration;

use chatdesk_business::{
    AuthError, Credentials, LoginError, LoginFormController, SubmissionState,
};
use egui::{Button, Key, Response, RichText, TextEdit, Ui};
use flume::{Receiver, Sender};
use log::debug;
use tokio::runtime::Handle;

use crate::utils::colors::COLOR_BLUE;

/// How often to repaint while waiting for the backend.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Sender for login result communication.
pub type LoginResultSender = Sender<Result<(), AuthError>>;
/// Receiver for login result communication.
pub type LoginResultReceiver = Receiver<Result<(), AuthError>>;

/// Field values plus the controller behind them.
pub struct LoginFormState {
    /// Username as typed.
    pub username: String,
    /// Password as typed.
    pub password: String,
    controller: LoginFormController,
    result_sender: LoginResultSender,
    result_receiver: LoginResultReceiver,
}

impl LoginFormState {
    pub fn new(controller: LoginFormController) -> Self {
        let (result_sender, result_receiver) = flume::unbounded();
        Self {
            username: String::new(),
            password: String::new(),
            controller,
            result_sender,
            result_receiver,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.controller.state()
    }

    pub fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }

    /// Submits the current field values.
    ///
    /// On a validated submit the login call is spawned on `runtime`; invalid
    /// input and resubmits while pending are handled by the controller.
    pub fn submit(&self, runtime: &Handle) {
        let pending = match self.controller.start(&self.credentials()) {
            Ok(pending) => pending,
            Err(err) => {
                debug!("Login form: submit not started: {err}");
                return;
            }
        };

        let sender = self.result_sender.clone();
        runtime.spawn(async move {
            let result = pending.resolve().await;
            // The receiver lives as long as the form; a closed channel means the app is gone.
            if sender.send(result).is_err() {
                debug!("Login form: dropped login result, form no longer exists");
            }
        });
    }

    /// Applies a settled login result, if one has arrived.
    ///
    /// A successful login leaves the form, so the fields are cleared.
    pub fn poll_login_result(&mut self) -> Option<Result<(), LoginError>> {
        let result = self.result_receiver.try_recv().ok()?;
        let outcome = self.controller.finish(result);
        if outcome.is_ok() {
            self.clear();
        }
        Some(outcome)
    }

    /// Empties both fields.
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

/// Renders the login form.
pub fn login_form(state: &mut LoginFormState, runtime: &Handle, ui: &mut Ui) -> Response {
    if let Some(Err(err)) = state.poll_login_result() {
        debug!("Login form: attempt ended with {err}");
    }

    let submission = state.submission_state();
    let mut should_submit = false;

    let response = ui
        .vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading("Welcome Back");
            ui.label("Sign in to continue to your chats.");
            ui.add_space(24.0);

            let username_label = ui.label("Username");
            let username = ui
                .add(
                    TextEdit::singleline(&mut state.username)
                        .desired_width(240.0)
                        .hint_text("Enter your username"),
                )
                .labelled_by(username_label.id);

            ui.add_space(8.0);

            let password_label = ui.label("Password");
            let password = ui
                .add(
                    TextEdit::singleline(&mut state.password)
                        .password(true)
                        .desired_width(240.0)
                        .hint_text("Enter your password"),
                )
                .labelled_by(password_label.id);

            // Enter in either field submits the form.
            if (username.lost_focus() || password.lost_focus())
                && ui.input(|i| i.key_pressed(Key::Enter))
            {
                should_submit = true;
            }

            ui.add_space(16.0);

            let button = Button::new(RichText::new(submission.button_label()))
                .fill(COLOR_BLUE)
                .min_size([240.0, 0.0].into());
            if ui.add_enabled(submission.can_submit(), button).clicked() {
                should_submit = true;
            }
        })
        .response;

    if should_submit && submission.can_submit() {
        state.submit(runtime);
    }

    if state.is_pending() {
        ui.ctx().request_repaint_after(PENDING_REPAINT_INTERVAL);
    }

    response
}
