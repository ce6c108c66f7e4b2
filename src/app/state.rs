// Skiff - app/state.rs
//
// UI-side state: which dialogs are open, their inputs, and one-shot
// requests that panels raise for the eframe App to act on (things that need
// the platform layer, such as spawning a window or a native file dialog).
// Browser data itself lives in `Browser`.

use crate::core::search::SearchEngine;

/// Top-level UI state, owned by the eframe::App implementation.
#[derive(Debug)]
pub struct AppState {
    /// Text typed in the find-in-page field.
    pub find_input: String,

    /// Whether the Settings dialog is open.
    pub show_settings: bool,

    /// Search engine selected in the (not yet saved) Settings dialog.
    pub settings_choice: SearchEngine,

    /// Whether the Add Bookmark dialog is open.
    pub show_add_bookmark: bool,

    /// Name typed in the Add Bookmark dialog.
    pub bookmark_title_input: String,

    /// Validation message shown inside the Add Bookmark dialog.
    pub bookmark_error: Option<String>,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// A menu or context menu was drawn this frame. Reset at the start of
    /// every frame and set by the panels that draw them.
    pub menu_open: bool,

    /// Focus the address field on the next frame (Ctrl+L).
    pub focus_address_bar: bool,

    /// Set by panels: open another browser window.
    pub request_new_window: bool,

    /// Set by panels: pick a local file and open it in the current tab.
    pub request_open_file: bool,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    pub fn new(dark_mode: bool, debug_mode: bool) -> Self {
        Self {
            find_input: String::new(),
            show_settings: false,
            settings_choice: SearchEngine::default(),
            show_add_bookmark: false,
            bookmark_title_input: String::new(),
            bookmark_error: None,
            show_about: false,
            menu_open: false,
            focus_address_bar: false,
            request_new_window: false,
            request_open_file: false,
            dark_mode,
            debug_mode,
        }
    }

    /// Open the Settings dialog preselecting the engine currently in use.
    pub fn open_settings(&mut self, current: SearchEngine) {
        self.settings_choice = current;
        self.show_settings = true;
    }

    /// Open the Add Bookmark dialog with an empty name field.
    pub fn open_add_bookmark(&mut self) {
        self.bookmark_title_input.clear();
        self.bookmark_error = None;
        self.show_add_bookmark = true;
    }

    /// True while any modal-style dialog is visible.
    ///
    /// Native web views are drawn above egui, so they are hidden while a
    /// dialog is open.
    pub fn any_dialog_open(&self) -> bool {
        self.show_settings || self.show_add_bookmark || self.show_about
    }

    /// True while egui content overlaps the page area: a dialog, a menu from
    /// the menu bar, or a context menu.
    pub fn page_obscured(&self) -> bool {
        self.any_dialog_open() || self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_settings_preselects_current_engine() {
        let mut state = AppState::new(true, false);
        state.open_settings(SearchEngine::Bing);
        assert!(state.show_settings);
        assert_eq!(state.settings_choice, SearchEngine::Bing);
        assert!(state.any_dialog_open());
    }

    #[test]
    fn test_open_add_bookmark_resets_input() {
        let mut state = AppState::new(true, false);
        state.bookmark_title_input = "stale".to_string();
        state.bookmark_error = Some("old".to_string());
        state.open_add_bookmark();
        assert!(state.bookmark_title_input.is_empty());
        assert!(state.bookmark_error.is_none());
    }

    #[test]
    fn test_open_menu_obscures_page_without_dialog() {
        let mut state = AppState::new(true, false);
        assert!(!state.page_obscured());
        state.menu_open = true;
        assert!(!state.any_dialog_open());
        assert!(state.page_obscured());
        state.menu_open = false;
        state.show_about = true;
        assert!(state.page_obscured());
    }
}
