// Skiff - core/engine.rs
//
// The boundary between Skiff and the embedded web engine.
//
// Skiff never renders, fetches, or scripts anything itself. Every page
// operation is forwarded through this trait to whichever engine the binary
// was built with (see platform::engine).

use crate::core::model::{EngineEvent, ViewId, ViewSpec, Viewport};
use crate::util::error::EngineError;

/// Operations Skiff needs from a web engine.
///
/// Implementations own the per-view navigation history; Skiff only keeps the
/// tab-to-view association.
pub trait WebEngine {
    /// Short identifier for logs and the About dialog.
    fn name(&self) -> &'static str;

    /// Create a view, start loading `spec.url`, and return its id.
    fn create_view(&mut self, spec: &ViewSpec) -> Result<ViewId, EngineError>;

    /// Release a view. Unknown ids are ignored.
    fn close_view(&mut self, view: ViewId);

    /// Navigate `view` to `url`.
    fn load_url(&mut self, view: ViewId, url: &str) -> Result<(), EngineError>;

    /// Step back in the view's navigation history. No-op at the start.
    fn back(&mut self, view: ViewId) -> Result<(), EngineError>;

    /// Step forward in the view's navigation history. No-op at the end.
    fn forward(&mut self, view: ViewId) -> Result<(), EngineError>;

    /// Reload the current page.
    fn reload(&mut self, view: ViewId) -> Result<(), EngineError>;

    /// Highlight the next occurrence of `text` in the page.
    fn find_text(&mut self, view: ViewId, text: &str) -> Result<(), EngineError>;

    /// Make `view` the visible one and hide all others.
    fn show_view(&mut self, view: ViewId);

    /// Position all views inside `viewport`.
    fn set_viewport(&mut self, viewport: Viewport);

    /// URL currently shown in `view`.
    fn url(&self, view: ViewId) -> Option<String>;

    /// Title of the document in `view`.
    fn title(&self, view: ViewId) -> Option<String>;

    fn can_go_back(&self, view: ViewId) -> bool;

    fn can_go_forward(&self, view: ViewId) -> bool;

    /// Take all events queued since the last call, in arrival order.
    fn drain_events(&mut self) -> Vec<EngineEvent>;
}
