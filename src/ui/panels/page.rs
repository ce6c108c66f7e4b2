// Skiff - ui/panels/page.rs
//
// Page area. The rectangle left over by the toolbars is handed to the
// engine, which positions the current tab's native view over it. Underneath
// the view (and in place of it when the engine renders nothing) a card
// shows the current tab's title and URL.

use crate::app::browser::Browser;
use crate::core::engine::WebEngine;
use crate::core::model::Viewport;

/// Render the page area into `ui`.
///
/// With `hidden` set the engine is given an empty viewport, so dialogs drawn
/// by egui are not covered by the native view.
pub fn render<E: WebEngine>(ui: &mut egui::Ui, browser: &mut Browser<E>, hidden: bool) {
    let rect = ui.available_rect_before_wrap();
    let viewport = if hidden {
        Viewport::default()
    } else {
        Viewport {
            x: rect.min.x,
            y: rect.min.y,
            width: rect.width(),
            height: rect.height(),
        }
    };
    browser.engine_mut().set_viewport(viewport);

    let Some(tab) = browser.tabs().current() else {
        return;
    };
    let url = browser.current_url().unwrap_or_default();

    ui.vertical_centered(|ui| {
        ui.add_space(rect.height() * 0.3);
        ui.label(egui::RichText::new(&tab.title).size(22.0).strong());
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&url).monospace().weak());
        if tab.profile.is_private() {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Private tab").italics().weak());
        }
        if url.starts_with("http") {
            ui.add_space(10.0);
            ui.hyperlink_to("Open in system browser", &url);
        }
    });
}
