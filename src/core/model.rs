// Skiff - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Views and profiles
// =============================================================================

/// Engine-assigned identifier of a single web view.
///
/// Stable for the lifetime of the view; never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Storage context a view runs in.
///
/// Every activation of private mode gets a fresh `Private` number so cookies
/// and storage from one private session never leak into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Shared, persistent profile.
    #[default]
    Normal,
    /// Ephemeral profile for one private-browsing session.
    Private(u32),
}

impl Profile {
    pub fn is_private(self) -> bool {
        matches!(self, Profile::Private(_))
    }
}

/// Everything an engine needs to create a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSpec {
    /// URL loaded immediately after creation.
    pub url: String,
    /// Storage context for the view.
    pub profile: Profile,
}

/// Rectangle (logical points, window coordinates) in which views are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// =============================================================================
// Engine events
// =============================================================================

/// Notification from the engine about one of its views.
///
/// Engines queue these and hand them over in `WebEngine::drain_events`; the
/// UI thread applies them once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The view's URL changed (navigation committed, redirect, history move).
    UrlChanged { view: ViewId, url: String },
    /// The document title changed.
    TitleChanged { view: ViewId, title: String },
    /// A page load completed.
    LoadFinished {
        view: ViewId,
        url: String,
        title: String,
    },
}

impl EngineEvent {
    /// The view this event refers to.
    pub fn view(&self) -> ViewId {
        match self {
            EngineEvent::UrlChanged { view, .. }
            | EngineEvent::TitleChanged { view, .. }
            | EngineEvent::LoadFinished { view, .. } => *view,
        }
    }
}

// =============================================================================
// Visit history
// =============================================================================

/// One entry of the History menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Page title at the time of the visit (may be empty).
    pub title: String,
    /// Visited URL.
    pub url: String,
    /// When the visit was recorded.
    pub visited_at: DateTime<Utc>,
}

impl Visit {
    /// Menu label in the form `"title - url"`.
    pub fn label(&self) -> String {
        if self.title.is_empty() {
            self.url.clone()
        } else {
            format!("{} - {}", self.title, self.url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_label_includes_title_and_url() {
        let visit = Visit {
            title: "Rust".to_string(),
            url: "https://www.rust-lang.org/".to_string(),
            visited_at: Utc::now(),
        };
        assert_eq!(visit.label(), "Rust - https://www.rust-lang.org/");
    }

    #[test]
    fn test_visit_label_without_title_is_url() {
        let visit = Visit {
            title: String::new(),
            url: "https://example.com/".to_string(),
            visited_at: Utc::now(),
        };
        assert_eq!(visit.label(), "https://example.com/");
    }

    #[test]
    fn test_event_view_accessor() {
        let event = EngineEvent::TitleChanged {
            view: ViewId(7),
            title: "t".to_string(),
        };
        assert_eq!(event.view(), ViewId(7));
        assert!(Profile::Private(1).is_private());
        assert!(!Profile::Normal.is_private());
    }
}
