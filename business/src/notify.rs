//! Notification capability and the toast payload it carries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    /// Error-styled feedback.
    Destructive,
}

/// A transient message for the user.
///
/// A toast without a variant is success or informational feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ToastVariant>,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: None,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Some(ToastVariant::Destructive),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Some(ToastVariant::Destructive)
    }
}

/// Fire-and-forget user feedback.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}
