// Skiff - gui.rs
//
// Top-level eframe::App implementation.
// Wires the panels to the browser controller, applies keyboard shortcuts,
// and carries out requests that need the platform layer (new windows,
// native file dialogs).

use crate::app::browser::Browser;
use crate::app::state::AppState;
use crate::platform::engine::DefaultEngine;
use crate::ui;
#[cfg(feature = "webview")]
use crate::util::constants::ENGINE_POLL_INTERVAL_MS;
use crate::util::constants::NEW_TAB_LABEL;
use egui::{Key, KeyboardShortcut, Modifiers};
use std::path::PathBuf;

const SHORTCUT_BACK: KeyboardShortcut = KeyboardShortcut::new(Modifiers::ALT, Key::ArrowLeft);
const SHORTCUT_FORWARD: KeyboardShortcut = KeyboardShortcut::new(Modifiers::ALT, Key::ArrowRight);
const SHORTCUT_RELOAD: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::R);
const SHORTCUT_HOME: KeyboardShortcut = KeyboardShortcut::new(Modifiers::ALT, Key::Home);
const SHORTCUT_NEW_TAB: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::T);
const SHORTCUT_CLOSE_TAB: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::W);
const SHORTCUT_NEW_WINDOW: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
const SHORTCUT_BOOKMARK: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::D);
const SHORTCUT_SETTINGS: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Comma);
const SHORTCUT_ADDRESS: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::L);

/// The Skiff application.
pub struct SkiffApp {
    pub browser: Browser<DefaultEngine>,
    pub state: AppState,
    /// `--config-dir` override, forwarded to windows opened from this one.
    config_dir: Option<PathBuf>,
    /// Last title sent to the window manager.
    window_title: &'static str,
}

impl SkiffApp {
    pub fn new(browser: Browser<DefaultEngine>, state: AppState, config_dir: Option<PathBuf>) -> Self {
        Self {
            browser,
            state,
            config_dir,
            window_title: "",
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let pressed = |shortcut: &KeyboardShortcut| ctx.input_mut(|i| i.consume_shortcut(shortcut));

        if pressed(&SHORTCUT_BACK) {
            self.browser.back();
        }
        if pressed(&SHORTCUT_FORWARD) {
            self.browser.forward();
        }
        if pressed(&SHORTCUT_RELOAD) {
            self.browser.reload();
        }
        if pressed(&SHORTCUT_HOME) {
            self.browser.navigate_home();
        }
        if pressed(&SHORTCUT_NEW_TAB) {
            self.browser.add_new_tab(None, NEW_TAB_LABEL);
        }
        if pressed(&SHORTCUT_CLOSE_TAB) {
            if let Some(index) = self.browser.tabs().current_index() {
                self.browser.close_tab(index);
            }
        }
        if pressed(&SHORTCUT_NEW_WINDOW) {
            self.state.request_new_window = true;
        }
        if pressed(&SHORTCUT_BOOKMARK) {
            self.state.open_add_bookmark();
        }
        if pressed(&SHORTCUT_SETTINGS) {
            self.state.open_settings(self.browser.search_engine());
        }
        if pressed(&SHORTCUT_ADDRESS) {
            self.state.focus_address_bar = true;
        }
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.state.show_settings = false;
            self.state.show_add_bookmark = false;
            self.state.show_about = false;
        }
    }

    /// Carry out one-shot requests raised by panels during the last frame.
    fn handle_requests(&mut self) {
        if self.state.request_new_window {
            self.state.request_new_window = false;
            match crate::platform::launch::spawn_window(
                self.config_dir.as_deref(),
                self.browser.is_private(),
            ) {
                Ok(_) => self.browser.status_message = "Opened a new window.".to_string(),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to open new window");
                    self.browser.status_message = format!("Could not open a new window: {e}");
                }
            }
        }

        if self.state.request_open_file {
            self.state.request_open_file = false;
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Web pages", &["html", "htm", "xhtml", "svg"])
                .add_filter("All files", &["*"])
                .pick_file()
            {
                match url::Url::from_file_path(&path) {
                    Ok(url) => self.browser.open_url(url.as_str()),
                    Err(()) => {
                        tracing::warn!(path = %path.display(), "Cannot express path as a file URL");
                        self.browser.status_message =
                            format!("Cannot open '{}'.", path.display());
                    }
                }
            }
        }
    }
}

impl eframe::App for SkiffApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        #[cfg(feature = "webview")]
        self.browser.engine_mut().realize(&*_frame);

        // Engine callbacks arrive between frames; keep polling while views
        // exist so titles and URLs update without user input.
        if self.browser.pump_events() > 0 {
            ctx.request_repaint();
        }
        #[cfg(feature = "webview")]
        ctx.request_repaint_after(std::time::Duration::from_millis(ENGINE_POLL_INTERVAL_MS));

        self.handle_shortcuts(ctx);
        self.handle_requests();

        let title = self.browser.window_title();
        if title != self.window_title {
            self.window_title = title;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
        }

        // Menus reopened this frame set the flag again before the page
        // area is laid out.
        self.state.menu_open = false;

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui::panels::menus::render(ctx, ui, &mut self.browser, &mut self.state);
        });

        // Navigation toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(2.0);
            ui::panels::toolbar::render(ui, &mut self.browser, &mut self.state);
            ui.add_space(2.0);
        });

        // Tab strip
        egui::TopBottomPanel::top("tab_strip").show(ctx, |ui| {
            ui::panels::tabs::render(ui, &mut self.browser, &mut self.state);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.browser.is_private() {
                    ui.label(
                        egui::RichText::new(" PRIVATE ")
                            .strong()
                            .color(ui::theme::PRIVATE_ACCENT)
                            .background_color(ui::theme::PRIVATE_BG),
                    );
                    ui.separator();
                }
                ui.label(&self.browser.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} \u{00b7} {} tab(s)",
                        self.browser.search_engine(),
                        self.browser.tabs().len()
                    ));
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").small().weak());
                    }
                });
            });
        });

        // Page area
        let hidden = self.state.page_obscured();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::page::render(ui, &mut self.browser, hidden);
        });

        // Dialogs
        ui::panels::settings::render(ctx, &mut self.browser, &mut self.state);
        ui::panels::bookmark_dialog::render(ctx, &mut self.browser, &mut self.state);
        let engine_name = crate::core::engine::WebEngine::name(self.browser.engine());
        ui::panels::about::render(ctx, &mut self.state, engine_name);

        // Actions taken this frame may have queued events already.
        if self.browser.pump_events() > 0 {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!(
            tabs = self.browser.tabs().len(),
            visits = self.browser.visits().len(),
            "Skiff exiting"
        );
    }
}
