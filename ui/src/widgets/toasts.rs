//! Toast notifications.
//!
//! [`ToastChannel`] is the [`Notifier`] handed to business code; it only
//! forwards toasts over a channel, so it can be called from any thread.
//! [`Toasts`] drains that channel on the UI thread and keeps each toast on
//! screen for [`TOAST_LIFETIME_SECS`].

use chatdesk_business::{Notifier, Toast};
use chrono::{DateTime, TimeDelta, Utc};
use egui::{Align2, Context, Frame, Id, Margin, Response, RichText, Ui};
use flume::{Receiver, Sender};
use log::warn;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

pub const TOAST_LIFETIME_SECS: i64 = 5;

#[derive(Debug, Clone)]
pub struct ToastChannel {
    sender: Sender<Toast>,
}

impl ToastChannel {
    pub fn new(sender: Sender<Toast>) -> Self {
        Self { sender }
    }
}

impl Notifier for ToastChannel {
    fn notify(&self, toast: Toast) {
        if self.sender.send(toast).is_err() {
            warn!("ToastChannel: toast surface is gone, dropping notification");
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    expires_at: DateTime<Utc>,
}

/// Toasts currently on screen.
#[derive(Debug)]
pub struct Toasts {
    receiver: Receiver<Toast>,
    active: Vec<ActiveToast>,
}

impl Toasts {
    pub fn new(receiver: Receiver<Toast>) -> Self {
        Self {
            receiver,
            active: Vec::new(),
        }
    }

    /// A connected notifier/surface pair.
    pub fn channel() -> (ToastChannel, Self) {
        let (sender, receiver) = flume::unbounded();
        (ToastChannel::new(sender), Self::new(receiver))
    }

    /// Picks up newly sent toasts and drops expired ones.
    pub fn sync(&mut self, now: DateTime<Utc>) {
        let lifetime = TimeDelta::seconds(TOAST_LIFETIME_SECS);
        self.active
            .extend(self.receiver.try_iter().map(|toast| ActiveToast {
                toast,
                expires_at: now + lifetime,
            }));
        self.active.retain(|active| active.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter().map(|active| &active.toast)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Renders the toast stack inside `ui`, newest last.
pub fn toast_stack(toasts: &Toasts, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        for toast in toasts.iter() {
            let fill = if toast.is_destructive() {
                COLOR_RED
            } else {
                COLOR_GREEN
            };
            Frame::NONE
                .fill(fill)
                .inner_margin(Margin::symmetric(12, 8))
                .outer_margin(Margin::symmetric(0, 4))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(&toast.title).strong().color(egui::Color32::WHITE));
                    ui.label(RichText::new(&toast.description).color(egui::Color32::WHITE));
                });
        }
    })
    .response
}

/// Shows the toast stack anchored to the bottom-right corner of the window.
pub fn show_toasts(toasts: &Toasts, ctx: &Context) {
    if toasts.is_empty() {
        return;
    }
    egui::Area::new(Id::new("toasts"))
        .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(ctx, |ui| {
            toast_stack(toasts, ui);
        });
}
