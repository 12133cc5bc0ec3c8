//! Shared color constants for the UI.

use egui::Color32;

/// Forest green color for success feedback.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for destructive/error feedback.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Blue color for the primary action button.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);
