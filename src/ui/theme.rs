// Skiff - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent used for the private-mode badge and tab underline.
pub const PRIVATE_ACCENT: Color32 = Color32::from_rgb(147, 51, 234); // Purple 600

/// Faint background behind the private-mode badge.
pub const PRIVATE_BG: Color32 = Color32::from_rgba_premultiplied(147, 51, 234, 30);

/// Underline colour for the selected tab in normal mode.
pub const ACTIVE_TAB_ACCENT: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Colour of error text inside dialogs.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Layout constants.
pub const TAB_MIN_WIDTH: f32 = 90.0;
pub const ADDRESS_BAR_MIN_WIDTH: f32 = 200.0;
pub const FIND_FIELD_WIDTH: f32 = 140.0;
pub const DIALOG_WIDTH: f32 = 340.0;

/// Accent for the current tab in the given mode.
pub fn tab_accent(private: bool) -> Color32 {
    if private {
        PRIVATE_ACCENT
    } else {
        ACTIVE_TAB_ACCENT
    }
}

/// Visuals for the configured theme.
pub fn visuals(dark_mode: bool) -> egui::Visuals {
    if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}
