// Skiff - platform/engine/offline.rs
//
// Engine used when Skiff is built without the `webview` feature, and by the
// test suite. It keeps each view's navigation history and reports the same
// events a real engine would, but fetches and renders nothing: loads
// "finish" immediately with a title derived from the URL.

use crate::core::engine::WebEngine;
use crate::core::history::NavHistory;
use crate::core::model::{EngineEvent, Profile, ViewId, ViewSpec, Viewport};
use crate::util::error::EngineError;
use std::collections::HashMap;

/// State of one offline view.
#[derive(Debug)]
struct OfflineView {
    profile: Profile,
    nav: NavHistory,
    title: String,
    last_find: Option<String>,
}

/// Navigation-only engine with no rendering backend.
#[derive(Debug, Default)]
pub struct OfflineEngine {
    views: HashMap<ViewId, OfflineView>,
    next_id: u64,
    visible: Option<ViewId>,
    viewport: Viewport,
    events: Vec<EngineEvent>,
}

impl OfflineEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// View currently raised by `show_view`.
    pub fn visible_view(&self) -> Option<ViewId> {
        self.visible
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of live views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    pub fn profile(&self, view: ViewId) -> Option<Profile> {
        self.views.get(&view).map(|v| v.profile)
    }

    /// Last text searched with `find_text` in `view`.
    pub fn last_find(&self, view: ViewId) -> Option<&str> {
        self.views.get(&view).and_then(|v| v.last_find.as_deref())
    }

    fn view_mut(&mut self, view: ViewId) -> Result<&mut OfflineView, EngineError> {
        self.views
            .get_mut(&view)
            .ok_or(EngineError::UnknownView { view: view.0 })
    }

    /// Queue the events of a completed navigation to the view's current entry.
    fn finish_load(&mut self, view: ViewId) {
        let Some(state) = self.views.get_mut(&view) else {
            return;
        };
        let Some(url) = state.nav.current().map(str::to_string) else {
            return;
        };
        state.title = title_for(&url);
        self.events.push(EngineEvent::UrlChanged {
            view,
            url: url.clone(),
        });
        self.events.push(EngineEvent::TitleChanged {
            view,
            title: state.title.clone(),
        });
        self.events.push(EngineEvent::LoadFinished {
            view,
            url,
            title: state.title.clone(),
        });
    }
}

/// Page title stand-in: the host without a leading `www.`, the file name for
/// `file:` URLs, or the URL itself.
pub fn title_for(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "file" {
                if let Some(name) = parsed.path_segments().and_then(|mut s| s.next_back()) {
                    if !name.is_empty() {
                        return name.to_string();
                    }
                }
            }
            match parsed.host_str() {
                Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
                None => url.to_string(),
            }
        }
        Err(_) => url.to_string(),
    }
}

impl WebEngine for OfflineEngine {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn create_view(&mut self, spec: &ViewSpec) -> Result<ViewId, EngineError> {
        url::Url::parse(&spec.url).map_err(|source| EngineError::InvalidUrl {
            url: spec.url.clone(),
            source,
        })?;

        let id = ViewId(self.next_id);
        self.next_id += 1;

        let mut nav = NavHistory::new();
        nav.navigate(&spec.url);
        self.views.insert(
            id,
            OfflineView {
                profile: spec.profile,
                nav,
                title: String::new(),
                last_find: None,
            },
        );
        tracing::debug!(view = %id, private = spec.profile.is_private(), "Offline view created");
        self.finish_load(id);
        Ok(id)
    }

    fn close_view(&mut self, view: ViewId) {
        if self.views.remove(&view).is_some() {
            tracing::debug!(view = %view, "Offline view closed");
        }
        if self.visible == Some(view) {
            self.visible = None;
        }
        self.events.retain(|e| e.view() != view);
    }

    fn load_url(&mut self, view: ViewId, url: &str) -> Result<(), EngineError> {
        url::Url::parse(url).map_err(|source| EngineError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        self.view_mut(view)?.nav.navigate(url);
        self.finish_load(view);
        Ok(())
    }

    fn back(&mut self, view: ViewId) -> Result<(), EngineError> {
        if self.view_mut(view)?.nav.back().is_some() {
            self.finish_load(view);
        }
        Ok(())
    }

    fn forward(&mut self, view: ViewId) -> Result<(), EngineError> {
        if self.view_mut(view)?.nav.forward().is_some() {
            self.finish_load(view);
        }
        Ok(())
    }

    fn reload(&mut self, view: ViewId) -> Result<(), EngineError> {
        self.view_mut(view)?;
        self.finish_load(view);
        Ok(())
    }

    fn find_text(&mut self, view: ViewId, text: &str) -> Result<(), EngineError> {
        let state = self.view_mut(view)?;
        state.last_find = (!text.is_empty()).then(|| text.to_string());
        Ok(())
    }

    fn show_view(&mut self, view: ViewId) {
        if self.views.contains_key(&view) {
            self.visible = Some(view);
        }
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn url(&self, view: ViewId) -> Option<String> {
        self.views
            .get(&view)
            .and_then(|v| v.nav.current())
            .map(str::to_string)
    }

    fn title(&self, view: ViewId) -> Option<String> {
        self.views.get(&view).map(|v| v.title.clone())
    }

    fn can_go_back(&self, view: ViewId) -> bool {
        self.views.get(&view).is_some_and(|v| v.nav.can_go_back())
    }

    fn can_go_forward(&self, view: ViewId) -> bool {
        self.views.get(&view).is_some_and(|v| v.nav.can_go_forward())
    }

    fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(url: &str) -> ViewSpec {
        ViewSpec {
            url: url.to_string(),
            profile: Profile::Normal,
        }
    }

    #[test]
    fn test_create_view_emits_load_events() {
        let mut engine = OfflineEngine::new();
        let id = engine.create_view(&spec("https://www.rust-lang.org/")).unwrap();
        let events = engine.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(
            &events[2],
            EngineEvent::LoadFinished { view, title, .. } if *view == id && title == "rust-lang.org"
        ));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_create_view_rejects_invalid_url() {
        let mut engine = OfflineEngine::new();
        let err = engine.create_view(&spec("not a url")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidUrl { .. }));
        assert_eq!(engine.view_count(), 0);
    }

    #[test]
    fn test_back_forward_follow_history() {
        let mut engine = OfflineEngine::new();
        let id = engine.create_view(&spec("https://a.example/")).unwrap();
        engine.load_url(id, "https://b.example/").unwrap();
        engine.back(id).unwrap();
        assert_eq!(engine.url(id).as_deref(), Some("https://a.example/"));
        assert!(engine.can_go_forward(id));
        engine.forward(id).unwrap();
        assert_eq!(engine.url(id).as_deref(), Some("https://b.example/"));
    }

    #[test]
    fn test_unknown_view_is_an_error() {
        let mut engine = OfflineEngine::new();
        assert!(matches!(
            engine.reload(ViewId(42)),
            Err(EngineError::UnknownView { view: 42 })
        ));
    }

    #[test]
    fn test_close_view_drops_pending_events() {
        let mut engine = OfflineEngine::new();
        let id = engine.create_view(&spec("https://a.example/")).unwrap();
        engine.show_view(id);
        engine.close_view(id);
        assert!(engine.drain_events().is_empty());
        assert_eq!(engine.visible_view(), None);
    }

    #[test]
    fn test_title_for_file_url_is_file_name() {
        assert_eq!(title_for("file:///home/u/page.html"), "page.html");
        assert_eq!(title_for("about:blank"), "about:blank");
    }
}
