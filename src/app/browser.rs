// Skiff - app/browser.rs
//
// The browser controller. Every toolbar button, menu entry, shortcut and
// engine callback ends up in one of the methods below, which forward the
// work to the current tab's engine view and keep tabs, bookmarks, history
// and the address bar in step.
//
// Failures never propagate to the UI loop: they are logged and shown in the
// status bar.

use crate::app::settings::SettingsStore;
use crate::core::address;
use crate::core::bookmarks::Bookmarks;
use crate::core::engine::WebEngine;
use crate::core::history::VisitLog;
use crate::core::model::{EngineEvent, Profile, ViewId, ViewSpec};
use crate::core::search::SearchEngine;
use crate::core::tabs::TabSet;
use crate::util::constants;
use crate::util::error::{self, BookmarkError, EngineError};

/// Startup options for a `Browser`.
#[derive(Debug, Default)]
pub struct BrowserOptions {
    /// Engine used for searches and, without `home_page`, as home.
    pub search_engine: SearchEngine,
    /// Fixed home page overriding the search engine's.
    pub home_page: Option<String>,
    /// Start in private mode.
    pub private: bool,
    /// URL for the first tab (home page if `None`).
    pub initial_url: Option<String>,
}

/// Tabs, bookmarks, history and settings wired to a web engine.
pub struct Browser<E: WebEngine> {
    engine: E,
    tabs: TabSet,
    bookmarks: Bookmarks,
    visits: VisitLog,
    settings: SettingsStore,
    search_engine: SearchEngine,
    home_override: Option<String>,
    /// Profile given to newly opened tabs.
    profile: Profile,
    /// Number of private sessions started so far.
    private_sessions: u32,

    /// Text in the address field. Edited by the toolbar, overwritten when
    /// the current tab navigates.
    pub address_bar: String,

    /// Status message for the status bar.
    pub status_message: String,
}

impl<E: WebEngine> Browser<E> {
    /// Create the browser and open its first tab.
    pub fn new(engine: E, settings: SettingsStore, options: BrowserOptions) -> Self {
        let mut browser = Self {
            engine,
            tabs: TabSet::new(),
            bookmarks: Bookmarks::new(),
            visits: VisitLog::new(),
            settings,
            search_engine: options.search_engine,
            home_override: options.home_page,
            profile: Profile::Normal,
            private_sessions: 0,
            address_bar: String::new(),
            status_message: "Ready.".to_string(),
        };
        if options.private {
            browser.start_private_session();
        }
        browser.add_new_tab(options.initial_url.as_deref(), constants::NEW_TAB_LABEL);

        tracing::info!(
            engine = browser.engine.name(),
            tabs = browser.tabs.len(),
            search_engine = %browser.search_engine,
            private = browser.is_private(),
            "Browser initialised"
        );
        browser
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    pub fn visits(&self) -> &VisitLog {
        &self.visits
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.search_engine
    }

    /// Profile that the next opened tab will use.
    pub fn active_profile(&self) -> Profile {
        self.profile
    }

    pub fn is_private(&self) -> bool {
        self.profile.is_private()
    }

    pub fn window_title(&self) -> &'static str {
        if self.is_private() {
            constants::WINDOW_TITLE_PRIVATE
        } else {
            constants::WINDOW_TITLE
        }
    }

    /// Page opened by Home and by new tabs.
    pub fn home_page(&self) -> String {
        self.home_page_for(self.search_engine)
    }

    /// Home page that would apply with `engine` selected. A `home_page` set
    /// in config.toml wins over every engine's own page.
    pub fn home_page_for(&self, engine: SearchEngine) -> String {
        self.home_override
            .clone()
            .unwrap_or_else(|| engine.home_url().to_string())
    }

    pub fn has_home_override(&self) -> bool {
        self.home_override.is_some()
    }

    fn current_view(&self) -> Option<ViewId> {
        self.tabs.current().map(|t| t.view)
    }

    /// URL of the current tab as the engine reports it.
    pub fn current_url(&self) -> Option<String> {
        let tab = self.tabs.current()?;
        self.engine
            .url(tab.view)
            .or_else(|| Some(tab.url.clone()))
            .filter(|u| !u.is_empty())
    }

    pub fn can_go_back(&self) -> bool {
        self.current_view()
            .is_some_and(|v| self.engine.can_go_back(v))
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_view()
            .is_some_and(|v| self.engine.can_go_forward(v))
    }

    // -------------------------------------------------------------------------
    // Tabs
    // -------------------------------------------------------------------------

    /// Open a tab at `url` (home page if `None`) and make it current.
    ///
    /// Returns the new tab's index, or `None` if the engine refused; the
    /// failure is logged and reported in the status bar.
    pub fn add_new_tab(&mut self, url: Option<&str>, label: &str) -> Option<usize> {
        let url = url.map(str::to_string).unwrap_or_else(|| self.home_page());
        match self.try_add_tab(&url, label) {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::error!(error = %e, "Error opening new tab");
                self.status_message = format!("Could not open tab: {e}");
                None
            }
        }
    }

    fn try_add_tab(&mut self, url: &str, label: &str) -> Result<usize, EngineError> {
        if self.tabs.len() >= constants::MAX_TABS {
            return Err(EngineError::TabLimit {
                max: constants::MAX_TABS,
            });
        }
        let spec = ViewSpec {
            url: url.to_string(),
            profile: self.profile,
        };
        let view = self.engine.create_view(&spec)?;
        let index = self.tabs.open(view, spec.profile, label, url);
        self.engine.show_view(view);
        self.address_bar = url.to_string();
        tracing::debug!(index, view = %view, private = spec.profile.is_private(), "Tab opened");
        Ok(index)
    }

    /// Close the tab at `index`. Closing the last remaining tab is a no-op.
    pub fn close_tab(&mut self, index: usize) {
        let Some(tab) = self.tabs.close(index) else {
            tracing::debug!(index, tabs = self.tabs.len(), "Close ignored");
            return;
        };
        self.engine.close_view(tab.view);
        tracing::debug!(index, view = %tab.view, "Tab closed");
        self.show_current();
    }

    /// Switch to the tab at `index`.
    pub fn select_tab(&mut self, index: usize) {
        if self.tabs.select(index) {
            self.show_current();
        }
    }

    /// Reorder tabs; the current tab stays current.
    pub fn move_tab(&mut self, from: usize, to: usize) {
        self.tabs.move_tab(from, to);
    }

    /// Raise the current tab's view and show its URL in the address bar.
    fn show_current(&mut self) {
        if let Some(view) = self.current_view() {
            self.engine.show_view(view);
            self.address_bar = self.current_url().unwrap_or_default();
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Run `op` against the current tab's view, reporting failures.
    fn with_current<F>(&mut self, what: &str, op: F)
    where
        F: FnOnce(&mut E, ViewId) -> Result<(), EngineError>,
    {
        let Some(view) = self.current_view() else {
            return;
        };
        if let Err(e) = op(&mut self.engine, view) {
            tracing::warn!(action = what, view = %view, error = %e, "Navigation failed");
            self.status_message = format!("{what} failed: {e}");
        }
    }

    pub fn back(&mut self) {
        self.with_current("Back", |engine, view| engine.back(view));
    }

    pub fn forward(&mut self) {
        self.with_current("Forward", |engine, view| engine.forward(view));
    }

    pub fn reload(&mut self) {
        self.with_current("Reload", |engine, view| engine.reload(view));
    }

    pub fn navigate_home(&mut self) {
        let home = self.home_page();
        self.open_url(&home);
    }

    /// Load `url` verbatim in the current tab.
    pub fn open_url(&mut self, url: &str) {
        self.with_current("Open", |engine, view| engine.load_url(view, url));
    }

    /// Load the text typed in the address bar: a URL, or a search with the
    /// configured engine.
    pub fn navigate_to_url(&mut self, text: &str) {
        match address::resolve(text, self.search_engine) {
            Ok(url) => {
                let search = matches!(address::classify(text), address::AddressInput::Search(_));
                tracing::debug!(search, "Navigating from address bar");
                self.open_url(&url);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Address bar input rejected");
                self.status_message = format!("Cannot open address: {e}");
            }
        }
    }

    /// Find `text` in the current page.
    pub fn search_in_page(&mut self, text: &str) {
        self.with_current("Find", |engine, view| engine.find_text(view, text));
    }

    // -------------------------------------------------------------------------
    // Engine events
    // -------------------------------------------------------------------------

    /// Apply all events the engine queued since the last call.
    /// Returns the number of events processed.
    pub fn pump_events(&mut self) -> usize {
        let events = self.engine.drain_events();
        let count = events.len();
        for event in events {
            self.on_engine_event(event);
        }
        count
    }

    pub fn on_engine_event(&mut self, event: EngineEvent) {
        let view = event.view();
        let is_current = self.current_view() == Some(view);
        let Some(tab) = self.tabs.by_view_mut(view) else {
            tracing::trace!(view = %view, "Event for closed view ignored");
            return;
        };

        match event {
            EngineEvent::UrlChanged { url, .. } => {
                tab.url.clone_from(&url);
                // Background tabs must not overwrite what the user sees.
                if is_current {
                    self.address_bar = url;
                }
            }
            EngineEvent::TitleChanged { title, .. } => {
                if !title.is_empty() {
                    tab.title = title;
                }
            }
            EngineEvent::LoadFinished { url, title, .. } => {
                tab.url.clone_from(&url);
                if !title.is_empty() {
                    tab.title.clone_from(&title);
                }
                let private = tab.profile.is_private();
                if is_current {
                    self.address_bar.clone_from(&url);
                }
                if !private {
                    self.visits.record(&title, &url);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Bookmarks and history
    // -------------------------------------------------------------------------

    /// Bookmark the current tab's page under `title`.
    pub fn add_bookmark(&mut self, title: &str) -> error::Result<()> {
        let url = self
            .current_url()
            .filter(|u| u != constants::BLANK_PAGE)
            .ok_or(BookmarkError::NothingToBookmark)?;
        let created = self.bookmarks.add(title, &url)?;
        tracing::info!(created, "Bookmark saved");
        self.status_message = format!("Bookmarked \u{201c}{}\u{201d}.", title.trim());
        Ok(())
    }

    /// Open the bookmark called `title` in the current tab.
    pub fn open_bookmark(&mut self, title: &str) {
        if let Some(url) = self.bookmarks.get(title).map(str::to_string) {
            self.open_url(&url);
        }
    }

    /// Delete the bookmark called `title`.
    pub fn remove_bookmark(&mut self, title: &str) {
        if self.bookmarks.remove(title).is_some() {
            tracing::info!("Bookmark removed");
            self.status_message = format!("Removed bookmark \u{201c}{title}\u{201d}.");
        }
    }

    /// Open the `index`-th visit (oldest first) in the current tab.
    pub fn open_visit(&mut self, index: usize) {
        if let Some(url) = self.visits.get(index).map(|v| v.url.clone()) {
            self.open_url(&url);
        }
    }

    // -------------------------------------------------------------------------
    // Settings and private mode
    // -------------------------------------------------------------------------

    /// Change the search engine.
    ///
    /// A changed choice is persisted and the current tab is sent to the new
    /// home page. Returns false (and does nothing) if unchanged.
    pub fn set_search_engine(&mut self, engine: SearchEngine) -> bool {
        if engine == self.search_engine {
            return false;
        }
        self.search_engine = engine;
        if let Err(e) = self
            .settings
            .set(constants::SETTINGS_KEY_SEARCH_ENGINE, engine.name())
        {
            tracing::warn!(error = %e, "Failed to persist search engine");
            self.status_message = format!("Search engine changed but not saved: {e}");
        } else {
            self.status_message = format!("Search engine changed to {engine}.");
        }
        tracing::info!(search_engine = %engine, "Search engine changed");
        self.navigate_home();
        true
    }

    fn start_private_session(&mut self) {
        self.private_sessions += 1;
        self.profile = Profile::Private(self.private_sessions);
    }

    /// Switch private browsing on or off.
    ///
    /// Switching on creates a fresh private profile. Either way, the current
    /// page is reopened in a new tab under the now-active profile and the
    /// tab it came from is closed. If that tab cannot be opened the mode is
    /// left unchanged.
    pub fn set_private_browsing(&mut self, enabled: bool) {
        if enabled == self.is_private() {
            return;
        }
        if self.tabs.len() >= constants::MAX_TABS {
            tracing::warn!(tabs = self.tabs.len(), "Private browsing toggle refused at tab limit");
            self.status_message = format!(
                "Close a tab first: private browsing needs room for one more (limit {}).",
                constants::MAX_TABS
            );
            return;
        }

        let saved = (self.profile, self.private_sessions);
        if enabled {
            self.start_private_session();
        } else {
            self.profile = Profile::Normal;
        }

        let previous = self.current_view();
        let url = self.current_url();
        if self
            .add_new_tab(url.as_deref(), constants::NEW_TAB_LABEL)
            .is_none()
        {
            (self.profile, self.private_sessions) = saved;
            return;
        }
        tracing::info!(private = enabled, "Private browsing toggled");
        if let Some(index) = previous.and_then(|v| self.tabs.find_by_view(v)) {
            self.close_tab(index);
        }
        self.status_message = if enabled {
            "Private browsing on.".to_string()
        } else {
            "Private browsing off.".to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::engine::OfflineEngine;
    use tempfile::TempDir;

    fn browser(dir: &TempDir) -> Browser<OfflineEngine> {
        let settings = SettingsStore::open(&dir.path().join("settings.json"));
        let mut b = Browser::new(OfflineEngine::new(), settings, BrowserOptions::default());
        b.pump_events();
        b
    }

    #[test]
    fn test_starts_with_one_tab_on_home_page() {
        let dir = TempDir::new().unwrap();
        let b = browser(&dir);
        assert_eq!(b.tabs().len(), 1);
        assert_eq!(b.current_url().as_deref(), Some("https://www.google.com"));
        assert_eq!(b.tabs().current().map(|t| t.title.as_str()), Some("google.com"));
    }

    #[test]
    fn test_home_page_for_prefers_config_override() {
        let dir = TempDir::new().unwrap();
        let b = browser(&dir);
        assert!(!b.has_home_override());
        assert_eq!(b.home_page_for(SearchEngine::Bing), SearchEngine::Bing.home_url());

        let settings = SettingsStore::open(&dir.path().join("other.json"));
        let options = BrowserOptions {
            home_page: Some("https://start.example/".to_string()),
            ..BrowserOptions::default()
        };
        let b = Browser::new(OfflineEngine::new(), settings, options);
        assert!(b.has_home_override());
        assert_eq!(b.home_page_for(SearchEngine::Bing), "https://start.example/");
        assert_eq!(b.home_page(), "https://start.example/");
    }

    #[test]
    fn test_closing_last_tab_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut b = browser(&dir);
        b.close_tab(0);
        assert_eq!(b.tabs().len(), 1);
        assert_eq!(b.engine().view_count(), 1);
    }

    #[test]
    fn test_close_releases_engine_view() {
        let dir = TempDir::new().unwrap();
        let mut b = browser(&dir);
        b.add_new_tab(Some("https://a.example/"), "New Tab");
        assert_eq!(b.engine().view_count(), 2);
        b.close_tab(1);
        assert_eq!(b.engine().view_count(), 1);
        assert_eq!(b.address_bar, "https://www.google.com");
    }

    #[test]
    fn test_search_query_uses_configured_engine() {
        let dir = TempDir::new().unwrap();
        let mut b = browser(&dir);
        b.set_search_engine(SearchEngine::Bing);
        b.navigate_to_url("rust tabs");
        assert_eq!(
            b.current_url().as_deref(),
            Some("https://www.bing.com/search?q=rust+tabs")
        );
    }

    #[test]
    fn test_background_url_change_does_not_touch_address_bar() {
        let dir = TempDir::new().unwrap();
        let mut b = browser(&dir);
        let background = b.tabs().current().unwrap().view;
        b.add_new_tab(Some("https://front.example/"), "New Tab");
        b.pump_events();
        b.on_engine_event(EngineEvent::UrlChanged {
            view: background,
            url: "https://elsewhere.example/".to_string(),
        });
        assert_eq!(b.address_bar, "https://front.example/");
        assert_eq!(b.tabs().get(0).unwrap().url, "https://elsewhere.example/");
    }

    #[test]
    fn test_invalid_tab_url_reports_error_without_panicking() {
        let dir = TempDir::new().unwrap();
        let mut b = browser(&dir);
        assert!(b.add_new_tab(Some("::not a url::"), "New Tab").is_none());
        assert_eq!(b.tabs().len(), 1);
        assert!(b.status_message.starts_with("Could not open tab"));
    }

    #[test]
    fn test_unchanged_search_engine_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut b = browser(&dir);
        assert!(!b.set_search_engine(SearchEngine::Google));
        assert!(b.settings().get(constants::SETTINGS_KEY_SEARCH_ENGINE).is_none());
    }

    #[test]
    fn test_bookmark_requires_title() {
        let dir = TempDir::new().unwrap();
        let mut b = browser(&dir);
        assert!(matches!(
            b.add_bookmark(""),
            Err(error::SkiffError::Bookmark(BookmarkError::EmptyTitle))
        ));
        assert!(b.bookmarks().is_empty());
    }

    #[test]
    fn test_remove_bookmark() {
        let dir = TempDir::new().unwrap();
        let mut b = browser(&dir);
        b.add_bookmark("Search").unwrap();
        assert_eq!(b.bookmarks().len(), 1);
        b.remove_bookmark("Search");
        assert!(b.bookmarks().is_empty());
        assert!(b.status_message.starts_with("Removed bookmark"));
    }
}
