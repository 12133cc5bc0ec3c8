//! Submission status of the login form.

/// Submit button label while no attempt is outstanding.
pub const SIGN_IN_LABEL: &str = "Sign In";
/// Submit button label while an attempt is outstanding.
pub const SIGNING_IN_LABEL: &str = "Signing in...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// An authentication call is in flight. Exclusive: no second call may start.
    Pending,
    /// The call has settled. The controller moves straight on to `Idle`, so
    /// observers only see this if a driver chooses to hold it.
    Resolved,
}

impl SubmissionState {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    /// Whether the submit control should accept clicks.
    pub fn can_submit(self) -> bool {
        !self.is_pending()
    }

    pub fn button_label(self) -> &'static str {
        if self.is_pending() {
            SIGNING_IN_LABEL
        } else {
            SIGN_IN_LABEL
        }
    }
}
