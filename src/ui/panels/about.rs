// Skiff - ui/panels/about.rs
//
// About dialog, opened from Help > About Skiff.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, APP_VERSION};

const REPO_URL: &str = "https://github.com/swatto86/Skiff";

/// Render the About dialog (if `state.show_about` is true).
///
/// `engine_name` identifies the web engine the binary was built with.
pub fn render(ctx: &egui::Context, state: &mut AppState, engine_name: &str) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_NAME).size(28.0).strong());
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("A small tabbed web browser.");
                ui.label(
                    egui::RichText::new(format!("Web engine: {engine_name}"))
                        .small()
                        .weak(),
                );
            });

            ui.add_space(10.0);

            ui.vertical_centered(|ui| {
                ui.hyperlink_to(REPO_URL, REPO_URL);
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("MIT License \u{00b7} \u{00a9} 2026 Swatto")
                        .small()
                        .weak(),
                );
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
