// Skiff - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Skiff operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SkiffError {
    /// The embedded web engine rejected an operation.
    Engine(EngineError),

    /// A bookmark could not be stored.
    Bookmark(BookmarkError),

    /// The persisted settings store could not be read or written.
    Settings(SettingsError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// A new browser window could not be launched.
    Launch(LaunchError),
}

impl fmt::Display for SkiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "Web engine error: {e}"),
            Self::Bookmark(e) => write!(f, "Bookmark error: {e}"),
            Self::Settings(e) => write!(f, "Settings error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Launch(e) => write!(f, "Launch error: {e}"),
        }
    }
}

impl std::error::Error for SkiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Bookmark(e) => Some(e),
            Self::Settings(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Launch(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

/// Errors raised at the web-engine boundary.
#[derive(Debug)]
pub enum EngineError {
    /// The engine could not create a new view.
    ViewCreation { url: String, reason: String },

    /// An operation referenced a view the engine does not know.
    UnknownView { view: u64 },

    /// A URL handed to the engine could not be parsed.
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// The maximum number of open tabs has been reached.
    TabLimit { max: usize },

    /// The native engine reported a failure for an otherwise valid request.
    Backend {
        operation: &'static str,
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewCreation { url, reason } => {
                write!(f, "cannot create a view for '{url}': {reason}")
            }
            Self::UnknownView { view } => write!(f, "no view with id {view}"),
            Self::InvalidUrl { url, source } => write!(f, "invalid URL '{url}': {source}"),
            Self::TabLimit { max } => write!(
                f,
                "cannot open more than {max} tabs. Close a tab and try again."
            ),
            Self::Backend { operation, reason } => {
                write!(f, "{operation} failed: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<EngineError> for SkiffError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

// ---------------------------------------------------------------------------
// Bookmark errors
// ---------------------------------------------------------------------------

/// Errors related to bookmark creation.
#[derive(Debug, PartialEq, Eq)]
pub enum BookmarkError {
    /// The user confirmed the dialog with an empty name.
    EmptyTitle,

    /// The name exceeds the maximum allowed length.
    TitleTooLong { length: usize, max: usize },

    /// There is no page to bookmark (blank tab).
    NothingToBookmark,
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "bookmark name must not be empty"),
            Self::TitleTooLong { length, max } => write!(
                f,
                "bookmark name is {length} characters, exceeds maximum of {max}"
            ),
            Self::NothingToBookmark => write!(f, "the current tab has no page to bookmark"),
        }
    }
}

impl std::error::Error for BookmarkError {}

impl From<BookmarkError> for SkiffError {
    fn from(e: BookmarkError) -> Self {
        Self::Bookmark(e)
    }
}

// ---------------------------------------------------------------------------
// Settings errors
// ---------------------------------------------------------------------------

/// Errors related to the persisted key-value settings store.
#[derive(Debug)]
pub enum SettingsError {
    /// I/O error reading or writing the store.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// JSON (de)serialisation failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "cannot {operation} settings '{}': {source}",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "malformed settings '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<SettingsError> for SkiffError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for SkiffError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Launch errors
// ---------------------------------------------------------------------------

/// Errors related to spawning an additional browser window.
#[derive(Debug)]
pub enum LaunchError {
    /// The path of the running executable could not be determined.
    CurrentExe { source: io::Error },

    /// The child process could not be started.
    Spawn { program: PathBuf, source: io::Error },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentExe { source } => {
                write!(f, "cannot locate the running executable: {source}")
            }
            Self::Spawn { program, source } => {
                write!(f, "cannot start '{}': {source}", program.display())
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CurrentExe { source } => Some(source),
            Self::Spawn { source, .. } => Some(source),
        }
    }
}

impl From<LaunchError> for SkiffError {
    fn from(e: LaunchError) -> Self {
        Self::Launch(e)
    }
}

/// Convenience type alias for Skiff results.
pub type Result<T> = std::result::Result<T, SkiffError>;
