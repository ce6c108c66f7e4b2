// Skiff - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Skiff";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Skiff";

/// Organisation name under which settings are stored.
pub const ORG_NAME: &str = "Swatto";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window title in normal browsing mode.
pub const WINDOW_TITLE: &str = "Skiff";

/// Window title while private browsing is active.
pub const WINDOW_TITLE_PRIVATE: &str = "Skiff (Private Mode)";

// =============================================================================
// Tabs
// =============================================================================

/// Label given to a freshly opened tab until its page reports a title.
pub const NEW_TAB_LABEL: &str = "New Tab";

/// Tab labels longer than this are elided in the tab strip.
pub const MAX_TAB_LABEL_CHARS: usize = 24;

/// Hard cap on simultaneously open tabs (prevents runaway Ctrl+T).
pub const MAX_TABS: usize = 100;

// =============================================================================
// Bookmarks and history
// =============================================================================

/// Maximum length of a bookmark title in characters.
pub const MAX_BOOKMARK_TITLE_CHARS: usize = 200;

/// Maximum number of visits kept in the in-memory history menu.
///
/// The log is append-only; once full, the oldest visits are dropped so the
/// menu stays navigable during long sessions.
pub const MAX_HISTORY_ENTRIES: usize = 500;

/// Number of most recent visits rendered in the History menu.
pub const HISTORY_MENU_ITEMS: usize = 30;

// =============================================================================
// Settings storage
// =============================================================================

/// File name of the persisted key-value settings store.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Key under which the selected search engine name is persisted.
pub const SETTINGS_KEY_SEARCH_ENGINE: &str = "search_engine";

/// Name of the search engine used when nothing is configured.
pub const DEFAULT_SEARCH_ENGINE: &str = "Google";

/// File name of the optional user configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Window
// =============================================================================

/// Default inner window size (logical points).
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest window size accepted from config.toml.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Largest window size accepted from config.toml.
pub const MAX_WINDOW_WIDTH: f32 = 7680.0;
pub const MAX_WINDOW_HEIGHT: f32 = 4320.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Engine
// =============================================================================

/// Page loaded for `about:blank` style placeholders.
pub const BLANK_PAGE: &str = "about:blank";

/// How often the UI polls the engine for events while pages are loading (ms).
pub const ENGINE_POLL_INTERVAL_MS: u64 = 100;
