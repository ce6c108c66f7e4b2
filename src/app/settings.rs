// Skiff - app/settings.rs
//
// Persisted key-value settings: the desktop equivalent of a per-application
// settings registry, keyed by organisation and application name through
// the platform config directory.
//
// - Values are strings; the store is a flat JSON object.
// - Every `set` is written immediately and atomically (write temp, rename),
//   so a crash mid-save never corrupts the previous good file.
// - A missing file is a normal first run; a corrupt file is logged and
//   treated as empty.

use crate::core::search::SearchEngine;
use crate::util::constants::SETTINGS_KEY_SEARCH_ENGINE;
use crate::util::error::SettingsError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File-backed string settings.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Open the store at `path`, loading any existing values.
    pub fn open(path: &Path) -> Self {
        let values = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(values) => {
                    tracing::debug!(path = %path.display(), keys = values.len(), "Settings loaded");
                    values
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Settings file is malformed; starting with defaults"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %e, "Cannot read settings file");
                }
                BTreeMap::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Store `value` under `key` and persist the whole store.
    ///
    /// The in-memory value is updated even if writing fails, so the running
    /// session keeps the user's choice.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                operation: "create directory for",
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.values).map_err(|source| {
            SettingsError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|source| SettingsError::Io {
            path: tmp.clone(),
            operation: "write",
            source,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = std::fs::remove_file(&tmp);
            SettingsError::Io {
                path: self.path.clone(),
                operation: "finalise",
                source,
            }
        })?;

        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// Pick the search engine at startup.
///
/// Priority: persisted setting > config.toml > built-in default. An unknown
/// persisted name falls back to the default with a warning.
pub fn initial_search_engine(store: &SettingsStore, configured: Option<SearchEngine>) -> SearchEngine {
    match store.get(SETTINGS_KEY_SEARCH_ENGINE) {
        Some(name) => SearchEngine::from_name(name),
        None => configured.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = SettingsStore::open(&path);
        assert!(store.get("search_engine").is_none());
        store.set("search_engine", "Bing").expect("set should succeed");

        let reopened = SettingsStore::open(&path);
        assert_eq!(reopened.get("search_engine"), Some("Bing"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let store = SettingsStore::open(&path);
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.get("search_engine"), None);
    }

    #[test]
    fn test_stale_temp_file_does_not_block_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        let mut store = SettingsStore::open(&path);
        store.set("search_engine", "DuckDuckGo").unwrap();
        assert_eq!(
            SettingsStore::open(&path).get("search_engine"),
            Some("DuckDuckGo")
        );
    }

    #[test]
    fn test_initial_search_engine_priority() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = SettingsStore::open(&path);

        assert_eq!(initial_search_engine(&store, None), SearchEngine::Google);
        assert_eq!(
            initial_search_engine(&store, Some(SearchEngine::Bing)),
            SearchEngine::Bing
        );

        store.set(SETTINGS_KEY_SEARCH_ENGINE, "DuckDuckGo").unwrap();
        assert_eq!(
            initial_search_engine(&store, Some(SearchEngine::Bing)),
            SearchEngine::DuckDuckGo
        );

        store.set(SETTINGS_KEY_SEARCH_ENGINE, "Lycos").unwrap();
        assert_eq!(initial_search_engine(&store, None), SearchEngine::Google);
    }
}
