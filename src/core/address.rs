// Skiff - core/address.rs
//
// Address-bar heuristics: decide whether typed text is a URL or a search
// query, and turn either into the URL the engine should load.
//
// Text containing a period and no space is a URL; everything else is a
// search.

use crate::core::search::SearchEngine;
use crate::util::error::EngineError;

/// Schemes recognised without a `//` authority part.
const OPAQUE_SCHEMES: &[&str] = &["about:", "data:", "file:", "mailto:"];

/// Classification of text entered in the address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// Something that should be loaded directly (scheme may still be missing).
    Url(String),
    /// Free text to send to the configured search engine.
    Search(String),
}

/// Classify address-bar text as a URL or a search query.
pub fn classify(text: &str) -> AddressInput {
    let text = text.trim();
    if text.contains('.') && !text.contains(' ') {
        AddressInput::Url(text.to_string())
    } else {
        AddressInput::Search(text.to_string())
    }
}

/// True if `text` already starts with a scheme (`https://`, `file:`, ...).
pub fn has_scheme(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if OPAQUE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return true;
    }
    match text.find("://") {
        Some(0) | None => false,
        Some(idx) => {
            let scheme = &text[..idx];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
    }
}

/// Prepend `http://` when the text carries no scheme of its own.
pub fn normalize_url(text: &str) -> String {
    let text = text.trim();
    if has_scheme(text) {
        text.to_string()
    } else {
        format!("http://{text}")
    }
}

/// Resolve address-bar text to the URL to load.
///
/// URL input is normalised and validated; search input is routed to
/// `engine`'s query endpoint.
pub fn resolve(text: &str, engine: SearchEngine) -> Result<String, EngineError> {
    match classify(text) {
        AddressInput::Url(raw) => {
            let candidate = normalize_url(&raw);
            url::Url::parse(&candidate)
                .map(|u| u.to_string())
                .map_err(|source| EngineError::InvalidUrl {
                    url: candidate,
                    source,
                })
        }
        AddressInput::Search(query) => Ok(engine.search_url(&query)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_text_without_space_is_url() {
        assert_eq!(
            classify("example.com"),
            AddressInput::Url("example.com".to_string())
        );
        assert_eq!(
            classify("  https://docs.rs/egui  "),
            AddressInput::Url("https://docs.rs/egui".to_string())
        );
    }

    #[test]
    fn test_text_without_period_is_search() {
        assert_eq!(classify("rust"), AddressInput::Search("rust".to_string()));
        assert_eq!(
            classify("localhost:8080"),
            AddressInput::Search("localhost:8080".to_string())
        );
    }

    #[test]
    fn test_text_with_space_is_search_even_with_period() {
        assert_eq!(
            classify("what is example.com"),
            AddressInput::Search("what is example.com".to_string())
        );
    }

    #[test]
    fn test_empty_text_is_search() {
        assert_eq!(classify("   "), AddressInput::Search(String::new()));
    }

    #[test]
    fn test_normalize_adds_http_scheme() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("file:///tmp/a.html"), "file:///tmp/a.html");
    }

    #[test]
    fn test_host_with_port_is_not_mistaken_for_scheme() {
        assert!(!has_scheme("example.com:8080/index.html"));
        assert_eq!(
            normalize_url("example.com:8080/index.html"),
            "http://example.com:8080/index.html"
        );
    }

    #[test]
    fn test_resolve_url_and_search() {
        assert_eq!(
            resolve("example.com", SearchEngine::Google).unwrap(),
            "http://example.com/"
        );
        assert_eq!(
            resolve("rust egui", SearchEngine::DuckDuckGo).unwrap(),
            "https://duckduckgo.com/?q=rust+egui"
        );
        assert_eq!(
            resolve("crates", SearchEngine::Bing).unwrap(),
            "https://www.bing.com/search?q=crates"
        );
    }

    #[test]
    fn test_resolve_rejects_unparseable_url() {
        let err = resolve("http://[::1.com", SearchEngine::Google).unwrap_err();
        assert!(matches!(err, EngineError::InvalidUrl { .. }));
    }
}
