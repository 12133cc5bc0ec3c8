//! Chat page for authenticated users.

use crate::state::State;
use crate::utils::colors::COLOR_GREEN;
use egui::{Response, RichText, Ui};

/// Renders the signed-in header with a sign-out button.
pub fn chat_page(state: &mut State, ui: &mut Ui) -> Response {
    let status = state.auth.status();
    let username = status.username().unwrap_or("User");

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Signed in as {username}")).color(COLOR_GREEN));
            if ui.button("Sign Out").clicked() {
                state.sign_out();
            }
        });
        ui.separator();
        ui.heading("Chats");
        ui.label("No conversations yet.");
    })
    .response
}
