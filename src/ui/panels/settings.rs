// Skiff - ui/panels/settings.rs
//
// Settings dialog: choose the search engine used for address-bar searches.
// The home page follows the engine unless config.toml sets one. Nothing
// changes until Save is pressed; Save persists the choice and sends the
// current tab to the home page.

use crate::app::browser::Browser;
use crate::app::state::AppState;
use crate::core::engine::WebEngine;
use crate::core::search::SearchEngine;
use crate::ui::theme;

/// Render the Settings dialog (if `state.show_settings` is true).
pub fn render<E: WebEngine>(ctx: &egui::Context, browser: &mut Browser<E>, state: &mut AppState) {
    if !state.show_settings {
        return;
    }

    let mut open = true;
    let mut save = false;
    let mut cancel = false;
    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(theme::DIALOG_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading("Search");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Search engine:");
                egui::ComboBox::from_id_salt("search_engine_choice")
                    .selected_text(state.settings_choice.name())
                    .show_ui(ui, |ui| {
                        for engine in SearchEngine::all() {
                            ui.selectable_value(&mut state.settings_choice, *engine, engine.name());
                        }
                    });
            });
            ui.add_space(2.0);
            let home = browser.home_page_for(state.settings_choice);
            let home = if browser.has_home_override() {
                format!("Home page: {home} (from config.toml)")
            } else {
                format!("Home page: {home}")
            };
            ui.label(egui::RichText::new(home).small().weak());

            ui.add_space(10.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if save {
        browser.set_search_engine(state.settings_choice);
    }
    if !open || save || cancel {
        state.show_settings = false;
    }
}
