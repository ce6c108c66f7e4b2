// Skiff - platform/engine/mod.rs
//
// Web engine implementations. The binary uses `DefaultEngine`, which is the
// wry engine when built with `--features webview` and the offline engine
// otherwise.

pub mod offline;
#[cfg(feature = "webview")]
pub mod wry;

pub use offline::OfflineEngine;

#[cfg(feature = "webview")]
pub type DefaultEngine = self::wry::WryEngine;

#[cfg(not(feature = "webview"))]
pub type DefaultEngine = OfflineEngine;

/// Construct the engine selected at build time.
pub fn default_engine(paths: &crate::platform::config::PlatformPaths) -> DefaultEngine {
    #[cfg(feature = "webview")]
    {
        self::wry::WryEngine::new(paths.data_dir.join("webview"))
    }
    #[cfg(not(feature = "webview"))]
    {
        tracing::info!(
            data = %paths.data_dir.display(),
            "Built without the webview feature; pages will not be rendered"
        );
        OfflineEngine::new()
    }
}
