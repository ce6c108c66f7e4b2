// Skiff - ui/panels/menus.rs
//
// Menu bar: File, View, Bookmarks, History, Help.
//
// Bookmarks lists every saved bookmark in insertion order. History lists
// the most recent visits, newest first, labelled "title - url". Choosing an
// entry opens it in the current tab; a bookmark's context menu removes it.

use crate::app::browser::Browser;
use crate::app::state::AppState;
use crate::core::engine::WebEngine;
use crate::ui::theme;
use crate::util::constants::{HISTORY_MENU_ITEMS, NEW_TAB_LABEL};

enum MenuAction {
    OpenBookmark(String),
    RemoveBookmark(String),
    OpenVisit(usize),
}

/// Render the menu bar into `ui`.
pub fn render<E: WebEngine>(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    browser: &mut Browser<E>,
    state: &mut AppState,
) {
    let mut action = None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            state.menu_open = true;
            if ui.button("New Tab").clicked() {
                browser.add_new_tab(None, NEW_TAB_LABEL);
                ui.close_menu();
            }
            if ui.button("New Window").clicked() {
                state.request_new_window = true;
                ui.close_menu();
            }
            if ui.button("Open File\u{2026}").clicked() {
                state.request_open_file = true;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("View", |ui| {
            state.menu_open = true;
            if ui.checkbox(&mut state.dark_mode, "Dark Mode").changed() {
                ctx.set_visuals(theme::visuals(state.dark_mode));
                ui.close_menu();
            }
        });

        ui.menu_button("Bookmarks", |ui| {
            state.menu_open = true;
            if ui.button("Add Bookmark\u{2026}").clicked() {
                state.open_add_bookmark();
                ui.close_menu();
            }
            if !browser.bookmarks().is_empty() {
                ui.separator();
            }
            for bookmark in browser.bookmarks().iter() {
                let response = ui.button(&bookmark.title).on_hover_text(&bookmark.url);
                if response.clicked() {
                    action = Some(MenuAction::OpenBookmark(bookmark.title.clone()));
                    ui.close_menu();
                }
                response.context_menu(|ui| {
                    state.menu_open = true;
                    if ui.button("Remove").clicked() {
                        action = Some(MenuAction::RemoveBookmark(bookmark.title.clone()));
                        ui.close_menu();
                    }
                });
            }
        });

        ui.menu_button("History", |ui| {
            state.menu_open = true;
            let visits = browser.visits();
            if visits.is_empty() {
                ui.label(egui::RichText::new("No pages visited yet").weak());
            }
            egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                for (index, visit) in visits.recent(HISTORY_MENU_ITEMS) {
                    if ui
                        .button(visit.label())
                        .on_hover_text(visit.visited_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                        .clicked()
                    {
                        action = Some(MenuAction::OpenVisit(index));
                        ui.close_menu();
                    }
                }
            });
        });

        ui.menu_button("Help", |ui| {
            state.menu_open = true;
            if ui.button("About Skiff").clicked() {
                state.show_about = true;
                ui.close_menu();
            }
        });
    });

    match action {
        Some(MenuAction::OpenBookmark(title)) => browser.open_bookmark(&title),
        Some(MenuAction::RemoveBookmark(title)) => browser.remove_bookmark(&title),
        Some(MenuAction::OpenVisit(index)) => browser.open_visit(index),
        None => {}
    }
}
