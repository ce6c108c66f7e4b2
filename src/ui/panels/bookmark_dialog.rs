// Skiff - ui/panels/bookmark_dialog.rs
//
// Add Bookmark dialog: asks for a name and bookmarks the current page under
// it. Validation errors keep the dialog open and are shown inline.

use crate::app::browser::Browser;
use crate::app::state::AppState;
use crate::core::engine::WebEngine;
use crate::ui::theme;

/// Render the Add Bookmark dialog (if `state.show_add_bookmark` is true).
pub fn render<E: WebEngine>(ctx: &egui::Context, browser: &mut Browser<E>, state: &mut AppState) {
    if !state.show_add_bookmark {
        return;
    }

    let mut open = true;
    let mut accept = false;
    let mut cancel = false;
    egui::Window::new("Add Bookmark")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(theme::DIALOG_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(url) = browser.current_url() {
                ui.label(egui::RichText::new(url).small().weak());
                ui.add_space(4.0);
            }
            ui.horizontal(|ui| {
                ui.label("Bookmark name:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.bookmark_title_input)
                        .desired_width(200.0),
                );
                response.request_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    accept = true;
                }
            });
            if let Some(err) = &state.bookmark_error {
                ui.add_space(4.0);
                ui.colored_label(theme::ERROR_TEXT, err);
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    accept = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if accept {
        match browser.add_bookmark(&state.bookmark_title_input) {
            Ok(()) => state.show_add_bookmark = false,
            Err(e) => {
                tracing::debug!(error = %e, "Bookmark rejected");
                state.bookmark_error = Some(e.to_string());
            }
        }
    }
    if !open || cancel {
        state.show_add_bookmark = false;
    }
}
