// Skiff - ui/panels/tabs.rs
//
// Tab strip. Click selects, the x button closes (hidden when only one tab
// is open), and the context menu moves a tab left or right.

use crate::app::browser::Browser;
use crate::app::state::AppState;
use crate::core::engine::WebEngine;
use crate::ui::theme;
use crate::util::constants::MAX_TAB_LABEL_CHARS;

/// Shorten `title` to at most `max` characters, ending in an ellipsis.
pub fn elide(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let kept: String = title.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}\u{2026}")
}

enum TabAction {
    Select(usize),
    Close(usize),
    Move { from: usize, to: usize },
}

/// Render the tab strip into `ui`.
pub fn render<E: WebEngine>(ui: &mut egui::Ui, browser: &mut Browser<E>, state: &mut AppState) {
    let count = browser.tabs().len();
    let current = browser.tabs().current_index();
    let accent = theme::tab_accent(browser.is_private());
    let mut action = None;

    egui::ScrollArea::horizontal()
        .id_salt("tab_strip")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for (index, tab) in browser.tabs().iter().enumerate() {
                    let selected = current == Some(index);
                    let mut label = egui::RichText::new(elide(&tab.title, MAX_TAB_LABEL_CHARS));
                    if selected {
                        label = label.strong().underline().color(accent);
                    }
                    if tab.profile.is_private() {
                        label = label.italics();
                    }

                    let height = ui.spacing().interact_size.y;
                    let response = ui
                        .add_sized(
                            [theme::TAB_MIN_WIDTH, height],
                            egui::SelectableLabel::new(selected, label),
                        )
                        .on_hover_text(&tab.url);
                    if response.clicked() {
                        action = Some(TabAction::Select(index));
                    }
                    response.context_menu(|ui| {
                        state.menu_open = true;
                        if ui
                            .add_enabled(index > 0, egui::Button::new("Move Left"))
                            .clicked()
                        {
                            action = Some(TabAction::Move {
                                from: index,
                                to: index - 1,
                            });
                            ui.close_menu();
                        }
                        if ui
                            .add_enabled(index + 1 < count, egui::Button::new("Move Right"))
                            .clicked()
                        {
                            action = Some(TabAction::Move {
                                from: index,
                                to: index + 1,
                            });
                            ui.close_menu();
                        }
                    });

                    if count > 1
                        && ui
                            .small_button("\u{00d7}")
                            .on_hover_text("Close tab")
                            .clicked()
                    {
                        action = Some(TabAction::Close(index));
                    }
                    ui.separator();
                }
            });
        });

    match action {
        Some(TabAction::Select(index)) => browser.select_tab(index),
        Some(TabAction::Close(index)) => browser.close_tab(index),
        Some(TabAction::Move { from, to }) => browser.move_tab(from, to),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elide_keeps_short_titles() {
        assert_eq!(elide("Rust", 24), "Rust");
    }

    #[test]
    fn test_elide_truncates_on_char_boundary() {
        let elided = elide("Ünïcödé título muy largo", 6);
        assert_eq!(elided.chars().count(), 6);
        assert!(elided.ends_with('\u{2026}'));
        assert!(elided.starts_with("Ünïcö"));
    }
}
