// Skiff - platform/engine/wry.rs
//
// Real web engine: one wry::WebView per tab, mounted as a child of the
// eframe window (WebView2 on Windows, WKWebView on macOS, WebKitGTK on
// Linux/X11).
//
// Views need the native window handle to be built, which is only available
// inside the eframe update loop. `create_view` therefore reserves an id and
// queues its `ViewSpec`; `realize` builds queued views once per frame.
//
// Engine callbacks run on the UI thread and forward everything through an
// mpsc channel; `drain_events` empties it.

use crate::core::engine::WebEngine;
use crate::core::model::{EngineEvent, ViewId, ViewSpec, Viewport};
use crate::util::error::EngineError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::raw_window_handle::HasWindowHandle;
use wry::{PageLoadEvent, Rect, WebContext, WebView, WebViewBuilder};

struct LiveView {
    webview: WebView,
    title: String,
    url: String,
}

/// wry-backed engine.
pub struct WryEngine {
    /// Persistent storage shared by all normal-profile views.
    context: WebContext,
    live: HashMap<ViewId, LiveView>,
    /// Views requested but not yet built (no window handle yet).
    pending: Vec<(ViewId, ViewSpec)>,
    next_id: u64,
    visible: Option<ViewId>,
    viewport: Viewport,
    tx: mpsc::Sender<EngineEvent>,
    rx: mpsc::Receiver<EngineEvent>,
}

impl WryEngine {
    /// Create the engine. Normal-profile data lives under `data_dir`.
    pub fn new(data_dir: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        tracing::info!(data = %data_dir.display(), "wry engine initialised");
        Self {
            context: WebContext::new(Some(data_dir)),
            live: HashMap::new(),
            pending: Vec::new(),
            next_id: 0,
            visible: None,
            viewport: Viewport::default(),
            tx,
            rx,
        }
    }

    /// Build every queued view as a child of `host`.
    ///
    /// Failures are logged and the view is dropped; its tab keeps showing the
    /// requested URL in the address bar.
    pub fn realize<W: HasWindowHandle>(&mut self, host: &W) {
        if self.pending.is_empty() {
            return;
        }
        for (id, spec) in std::mem::take(&mut self.pending) {
            match self.build(host, id, &spec) {
                Ok(webview) => {
                    tracing::debug!(view = %id, private = spec.profile.is_private(), "Web view created");
                    self.live.insert(
                        id,
                        LiveView {
                            webview,
                            title: String::new(),
                            url: spec.url.clone(),
                        },
                    );
                }
                Err(e) => {
                    tracing::error!(view = %id, error = %e, "Failed to create web view");
                }
            }
        }
        if let Some(id) = self.visible {
            self.show_view(id);
        }
    }

    fn build<W: HasWindowHandle>(
        &mut self,
        host: &W,
        id: ViewId,
        spec: &ViewSpec,
    ) -> Result<WebView, EngineError> {
        let tx_title = self.tx.clone();
        let tx_load = self.tx.clone();
        let builder = if spec.profile.is_private() {
            WebViewBuilder::new().with_incognito(true)
        } else {
            WebViewBuilder::new_with_web_context(&mut self.context)
        };

        builder
            .with_url(&spec.url)
            .with_bounds(to_rect(self.viewport))
            .with_visible(false)
            .with_devtools(cfg!(debug_assertions))
            .with_clipboard(true)
            .with_document_title_changed_handler(move |title| {
                let _ = tx_title.send(EngineEvent::TitleChanged { view: id, title });
            })
            .with_on_page_load_handler(move |event, url| {
                let msg = match event {
                    PageLoadEvent::Started => EngineEvent::UrlChanged { view: id, url },
                    PageLoadEvent::Finished => EngineEvent::LoadFinished {
                        view: id,
                        url,
                        title: String::new(),
                    },
                };
                let _ = tx_load.send(msg);
            })
            .build_as_child(host)
            .map_err(|e| EngineError::ViewCreation {
                url: spec.url.clone(),
                reason: e.to_string(),
            })
    }

    fn live(&self, view: ViewId) -> Result<&LiveView, EngineError> {
        self.live
            .get(&view)
            .ok_or(EngineError::UnknownView { view: view.0 })
    }

    fn run_script(&self, view: ViewId, operation: &'static str, js: &str) -> Result<(), EngineError> {
        match self.live(view) {
            Ok(v) => v.webview.evaluate_script(js).map_err(|e| EngineError::Backend {
                operation,
                reason: e.to_string(),
            }),
            // Still queued: nothing to navigate yet.
            Err(_) if self.pending.iter().any(|(id, _)| *id == view) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

fn to_rect(viewport: Viewport) -> Rect {
    Rect {
        position: LogicalPosition::new(viewport.x as f64, viewport.y as f64).into(),
        size: LogicalSize::new(viewport.width.max(0.0) as f64, viewport.height.max(0.0) as f64)
            .into(),
    }
}

impl WebEngine for WryEngine {
    fn name(&self) -> &'static str {
        "wry"
    }

    fn create_view(&mut self, spec: &ViewSpec) -> Result<ViewId, EngineError> {
        url::Url::parse(&spec.url).map_err(|source| EngineError::InvalidUrl {
            url: spec.url.clone(),
            source,
        })?;
        let id = ViewId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, spec.clone()));
        Ok(id)
    }

    fn close_view(&mut self, view: ViewId) {
        self.pending.retain(|(id, _)| *id != view);
        // Dropping the WebView destroys the native child window.
        if self.live.remove(&view).is_some() {
            tracing::debug!(view = %view, "Web view closed");
        }
        if self.visible == Some(view) {
            self.visible = None;
        }
    }

    fn load_url(&mut self, view: ViewId, url: &str) -> Result<(), EngineError> {
        if let Some((_, spec)) = self.pending.iter_mut().find(|(id, _)| *id == view) {
            spec.url = url.to_string();
            return Ok(());
        }
        self.live(view)?
            .webview
            .load_url(url)
            .map_err(|e| EngineError::Backend {
                operation: "load_url",
                reason: e.to_string(),
            })
    }

    fn back(&mut self, view: ViewId) -> Result<(), EngineError> {
        self.run_script(view, "back", "history.back();")
    }

    fn forward(&mut self, view: ViewId) -> Result<(), EngineError> {
        self.run_script(view, "forward", "history.forward();")
    }

    fn reload(&mut self, view: ViewId) -> Result<(), EngineError> {
        self.run_script(view, "reload", "location.reload();")
    }

    fn find_text(&mut self, view: ViewId, text: &str) -> Result<(), EngineError> {
        let needle = serde_json::to_string(text).map_err(|e| EngineError::Backend {
            operation: "find_text",
            reason: e.to_string(),
        })?;
        self.run_script(view, "find_text", &format!("window.find({needle});"))
    }

    fn show_view(&mut self, view: ViewId) {
        self.visible = Some(view);
        for (id, v) in &self.live {
            if let Err(e) = v.webview.set_visible(*id == view) {
                tracing::warn!(view = %id, error = %e, "Failed to change web view visibility");
            }
        }
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        let rect = to_rect(viewport);
        for (id, v) in &self.live {
            if let Err(e) = v.webview.set_bounds(rect) {
                tracing::warn!(view = %id, error = %e, "Failed to resize web view");
            }
        }
    }

    fn url(&self, view: ViewId) -> Option<String> {
        if let Some(v) = self.live.get(&view) {
            return Some(v.webview.url().unwrap_or_else(|_| v.url.clone()));
        }
        self.pending
            .iter()
            .find(|(id, _)| *id == view)
            .map(|(_, spec)| spec.url.clone())
    }

    fn title(&self, view: ViewId) -> Option<String> {
        self.live.get(&view).map(|v| v.title.clone())
    }

    // Browsing history stays inside the native engine; report optimistic
    // values so the buttons remain enabled.
    fn can_go_back(&self, view: ViewId) -> bool {
        self.live.contains_key(&view)
    }

    fn can_go_forward(&self, view: ViewId) -> bool {
        self.live.contains_key(&view)
    }

    fn drain_events(&mut self) -> Vec<EngineEvent> {
        let mut out = Vec::new();
        while let Ok(mut event) = self.rx.try_recv() {
            let Some(v) = self.live.get_mut(&event.view()) else {
                continue;
            };
            match &mut event {
                EngineEvent::UrlChanged { url, .. } => v.url = url.clone(),
                EngineEvent::TitleChanged { title, .. } => v.title = title.clone(),
                EngineEvent::LoadFinished { url, title, .. } => {
                    v.url = url.clone();
                    if title.is_empty() {
                        title.clone_from(&v.title);
                    }
                }
            }
            out.push(event);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wry::dpi::{Position, Size};

    #[test]
    fn test_to_rect_clamps_negative_size() {
        let rect = to_rect(Viewport {
            x: 10.0,
            y: 20.0,
            width: -5.0,
            height: 300.0,
        });
        assert_eq!(rect.position, Position::from(LogicalPosition::new(10.0, 20.0)));
        assert_eq!(rect.size, Size::from(LogicalSize::new(0.0, 300.0)));
    }
}
