// Skiff - core/search.rs
//
// Built-in search engines: display names, home pages and query endpoints.

use serde::{Deserialize, Serialize};

/// A search engine the address bar can route queries to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    DuckDuckGo,
}

impl SearchEngine {
    /// Returns all variants in settings-dialog order.
    pub fn all() -> &'static [SearchEngine] {
        &[SearchEngine::Google, SearchEngine::Bing, SearchEngine::DuckDuckGo]
    }

    /// Name shown in the settings dialog and persisted in settings storage.
    pub fn name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Page opened by Home and by new tabs.
    pub fn home_url(self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com",
            Self::Bing => "https://www.bing.com",
            Self::DuckDuckGo => "https://duckduckgo.com",
        }
    }

    /// Query endpoint; the encoded query is appended to this prefix.
    pub fn query_endpoint(self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com/search?q=",
            Self::Bing => "https://www.bing.com/search?q=",
            Self::DuckDuckGo => "https://duckduckgo.com/?q=",
        }
    }

    /// Build the search request URL for `query`.
    ///
    /// The query is form-encoded so `&`, `#` and spaces cannot break out of
    /// the `q` parameter.
    pub fn search_url(self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{encoded}", self.query_endpoint())
    }

    /// Look up an engine by its persisted name.
    ///
    /// Matching is case-insensitive. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<SearchEngine> {
        let needle = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(needle))
    }

    /// Look up an engine by name, falling back to the default for unknown names.
    pub fn from_name(name: &str) -> SearchEngine {
        match Self::parse(name) {
            Some(engine) => engine,
            None => {
                tracing::warn!(
                    name,
                    fallback = SearchEngine::default().name(),
                    "Unknown search engine; using default"
                );
                SearchEngine::default()
            }
        }
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_per_engine() {
        assert_eq!(
            SearchEngine::Google.search_url("rust"),
            "https://www.google.com/search?q=rust"
        );
        assert_eq!(
            SearchEngine::Bing.search_url("rust"),
            "https://www.bing.com/search?q=rust"
        );
        assert_eq!(
            SearchEngine::DuckDuckGo.search_url("rust"),
            "https://duckduckgo.com/?q=rust"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            SearchEngine::Google.search_url("fish & chips #1"),
            "https://www.google.com/search?q=fish+%26+chips+%231"
        );
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(SearchEngine::from_name("duckduckgo"), SearchEngine::DuckDuckGo);
        assert_eq!(SearchEngine::from_name(" Bing "), SearchEngine::Bing);
    }

    #[test]
    fn test_unknown_name_falls_back_to_google() {
        assert_eq!(SearchEngine::from_name("AltaVista"), SearchEngine::Google);
        assert_eq!(SearchEngine::parse("AltaVista"), None);
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for engine in SearchEngine::all() {
            assert_eq!(SearchEngine::parse(engine.name()), Some(*engine));
        }
    }
}
