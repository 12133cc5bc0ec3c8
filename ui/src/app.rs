use std::time::Duration;

use chatdesk_business::Route;

use crate::{pages, state::State, widgets};

/// Keeps toasts expiring on time while nothing else triggers a repaint.
const TOAST_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

pub struct ChatdeskApp {
    state: State,
}

impl ChatdeskApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Renders one frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.state.sync();

        egui::CentralPanel::default().show(ctx, |ui| match self.state.page() {
            Route::Login => {
                pages::login_page(&mut self.state, ui);
            }
            Route::Chat => {
                pages::chat_page(&mut self.state, ui);
            }
        });

        widgets::show_toasts(&self.state.toasts, ctx);

        if !self.state.toasts.is_empty() {
            ctx.request_repaint_after(TOAST_REPAINT_INTERVAL);
        }
    }
}

impl eframe::App for ChatdeskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
