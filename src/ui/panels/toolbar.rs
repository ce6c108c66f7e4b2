// Skiff - ui/panels/toolbar.rs
//
// Navigation toolbar: Back, Forward, Reload, Home, the address field, New
// Tab, find-in-page, Settings, private browsing, and New Window.
//
// Back/Forward are disabled when the current view cannot move in that
// direction. Pressing Enter in the address field navigates; pressing Enter
// in the find field searches the page.

use crate::app::browser::Browser;
use crate::app::state::AppState;
use crate::core::engine::WebEngine;
use crate::ui::theme;
use crate::util::constants::NEW_TAB_LABEL;

/// Render the toolbar into `ui`.
pub fn render<E: WebEngine>(ui: &mut egui::Ui, browser: &mut Browser<E>, state: &mut AppState) {
    ui.horizontal(|ui| {
        let can_back = browser.can_go_back();
        let can_forward = browser.can_go_forward();

        if ui
            .add_enabled(can_back, egui::Button::new("\u{2190}"))
            .on_hover_text("Back (Alt+Left)")
            .clicked()
        {
            browser.back();
        }
        if ui
            .add_enabled(can_forward, egui::Button::new("\u{2192}"))
            .on_hover_text("Forward (Alt+Right)")
            .clicked()
        {
            browser.forward();
        }
        if ui
            .button("\u{27f3}")
            .on_hover_text("Reload (Ctrl+R)")
            .clicked()
        {
            browser.reload();
        }
        if ui
            .button("\u{2302}")
            .on_hover_text("Home (Alt+Home)")
            .clicked()
        {
            browser.navigate_home();
        }

        // Right-aligned controls are laid out first so the address field can
        // take whatever width remains.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("\u{2750}")
                .on_hover_text("New Window (Ctrl+N)")
                .clicked()
            {
                state.request_new_window = true;
            }

            let mut private = browser.is_private();
            let private_label = if private {
                egui::RichText::new("Private")
                    .color(theme::PRIVATE_ACCENT)
                    .background_color(theme::PRIVATE_BG)
            } else {
                egui::RichText::new("Private")
            };
            if ui
                .toggle_value(&mut private, private_label)
                .on_hover_text("Private browsing")
                .changed()
            {
                browser.set_private_browsing(private);
            }

            if ui
                .button("\u{2699}")
                .on_hover_text("Settings (Ctrl+,)")
                .clicked()
            {
                state.open_settings(browser.search_engine());
            }

            let find = ui.add(
                egui::TextEdit::singleline(&mut state.find_input)
                    .hint_text("Find in page")
                    .desired_width(theme::FIND_FIELD_WIDTH),
            );
            if find.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                && !state.find_input.is_empty()
            {
                let text = state.find_input.clone();
                browser.search_in_page(&text);
            }

            if ui
                .button("+")
                .on_hover_text("New Tab (Ctrl+T)")
                .clicked()
            {
                browser.add_new_tab(None, NEW_TAB_LABEL);
            }

            let width = ui.available_width().max(theme::ADDRESS_BAR_MIN_WIDTH);
            let address = ui.add(
                egui::TextEdit::singleline(&mut browser.address_bar)
                    .hint_text("Search or enter address")
                    .desired_width(width),
            );
            if state.focus_address_bar {
                state.focus_address_bar = false;
                address.request_focus();
            }
            if address.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                let text = browser.address_bar.clone();
                browser.navigate_to_url(&text);
            }
        });
    });
}
