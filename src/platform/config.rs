// Skiff - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::search::SearchEngine;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Skiff data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/skiff/ or %APPDATA%\Swatto\Skiff\config\)
    pub config_dir: PathBuf,

    /// Persisted key-value settings (search engine choice).
    pub settings_file: PathBuf,

    /// Data directory for engine profiles and caches.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", constants::ORG_NAME, constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self::from_dirs(config_dir, data_dir)
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self::from_dirs(fallback.clone(), fallback)
        }
    }

    /// Use `config_dir` for both configuration and data (`--config-dir`).
    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self::from_dirs(config_dir.to_path_buf(), config_dir.join("data"))
    }

    fn from_dirs(config_dir: PathBuf, data_dir: PathBuf) -> Self {
        Self {
            settings_file: config_dir.join(constants::SETTINGS_FILE_NAME),
            config_dir,
            data_dir,
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[browser]` section.
    pub browser: BrowserSection,
    /// `[window]` section.
    pub window: WindowSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[browser]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BrowserSection {
    /// Search engine used until one is chosen in the Settings dialog.
    pub search_engine: Option<String>,
    /// Fixed home page; overrides the search engine's home page.
    pub home_page: Option<String>,
}

/// `[window]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct WindowSection {
    /// Initial inner width in logical points.
    pub width: Option<f32>,
    /// Initial inner height in logical points.
    pub height: Option<f32>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Browser --
    /// Search engine from config (persisted settings take precedence).
    pub search_engine: Option<SearchEngine>,
    /// Home page override.
    pub home_page: Option<String>,

    // -- Window --
    pub window_width: f32,
    pub window_height: f32,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_engine: None,
            home_page: None,
            window_width: constants::DEFAULT_WINDOW_WIDTH,
            window_height: constants::DEFAULT_WINDOW_HEIGHT,
            dark_mode: true,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unparseable, returns defaults with an error warning so the
/// application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source,
            };
            tracing::warn!(error = %err, "Config unreadable");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source,
            };
            tracing::warn!(error = %err, "Config unparseable");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Browser: search_engine --
    if let Some(ref name) = raw.browser.search_engine {
        match SearchEngine::parse(name) {
            Some(engine) => config.search_engine = Some(engine),
            None => warnings.push(format!(
                "[browser] search_engine = \"{name}\" is not recognised. \
                 Expected one of: Google, Bing, DuckDuckGo. Using default ({}).",
                constants::DEFAULT_SEARCH_ENGINE,
            )),
        }
    }

    // -- Browser: home_page --
    if let Some(ref page) = raw.browser.home_page {
        // Empty means "use the search engine's home page".
        let page = page.trim();
        if page.is_empty() {
            config.home_page = None;
        } else if url::Url::parse(page).is_ok() {
            config.home_page = Some(page.to_string());
        } else {
            warnings.push(format!(
                "[browser] home_page = \"{page}\" is not an absolute URL \
                 (e.g. \"https://example.com\"). Using the search engine home page.",
            ));
        }
    }

    // -- Window: width --
    if let Some(width) = raw.window.width {
        if (constants::MIN_WINDOW_WIDTH..=constants::MAX_WINDOW_WIDTH).contains(&width) {
            config.window_width = width;
        } else {
            out_of_range(
                &mut warnings,
                "window.width",
                width,
                constants::MIN_WINDOW_WIDTH,
                constants::MAX_WINDOW_WIDTH,
                constants::DEFAULT_WINDOW_WIDTH,
            );
        }
    }

    // -- Window: height --
    if let Some(height) = raw.window.height {
        if (constants::MIN_WINDOW_HEIGHT..=constants::MAX_WINDOW_HEIGHT).contains(&height) {
            config.window_height = height;
        } else {
            out_of_range(
                &mut warnings,
                "window.height",
                height,
                constants::MIN_WINDOW_HEIGHT,
                constants::MAX_WINDOW_HEIGHT,
                constants::DEFAULT_WINDOW_HEIGHT,
            );
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn out_of_range(warnings: &mut Vec<String>, field: &str, value: f32, min: f32, max: f32, default: f32) {
    let err = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: format!("{min}-{max}"),
    };
    warnings.push(format!("{err}. Using default ({default})."));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) {
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn test_missing_config_returns_defaults_without_warnings() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.window_width, constants::DEFAULT_WINDOW_WIDTH);
        assert!(config.search_engine.is_none());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[browser]
search_engine = "duckduckgo"
home_page = "https://start.example.org"

[window]
width = 1024
height = 700

[ui]
theme = "light"

[logging]
level = "DEBUG"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.search_engine, Some(SearchEngine::DuckDuckGo));
        assert_eq!(config.home_page.as_deref(), Some("https://start.example.org"));
        assert_eq!(config.window_width, 1024.0);
        assert!(!config.dark_mode);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[browser]
search_engine = "AltaVista"
home_page = "not a url"

[window]
width = 10

[ui]
theme = "neon"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 4, "got: {warnings:?}");
        assert!(config.search_engine.is_none());
        assert!(config.home_page.is_none());
        assert_eq!(config.window_width, constants::DEFAULT_WINDOW_WIDTH);
        assert!(config.dark_mode);
    }

    #[test]
    fn test_unparseable_config_warns() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[browser\nsearch_engine = ");
        let (_, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_config_dir_override_places_settings_inside() {
        let dir = TempDir::new().unwrap();
        let paths = PlatformPaths::with_config_dir(dir.path());
        assert_eq!(
            paths.settings_file,
            dir.path().join(constants::SETTINGS_FILE_NAME)
        );
    }
}
