// Skiff - core/bookmarks.rs
//
// In-memory bookmark list: title -> URL, in insertion order.
// Rebuilt on every run; nothing is written to disk.

use crate::util::constants::MAX_BOOKMARK_TITLE_CHARS;
use crate::util::error::BookmarkError;

/// A single bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

/// Ordered title -> URL mapping backing the Bookmarks menu.
///
/// Titles are unique keys. Re-adding an existing title replaces its URL
/// in place so the menu entry keeps its position.
#[derive(Debug, Default)]
pub struct Bookmarks {
    items: Vec<Bookmark>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the bookmark called `title`.
    ///
    /// Leading/trailing whitespace is stripped from the title. Returns true
    /// when a new entry was created, false when an existing one was updated.
    pub fn add(&mut self, title: &str, url: &str) -> Result<bool, BookmarkError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BookmarkError::EmptyTitle);
        }
        let length = title.chars().count();
        if length > MAX_BOOKMARK_TITLE_CHARS {
            return Err(BookmarkError::TitleTooLong {
                length,
                max: MAX_BOOKMARK_TITLE_CHARS,
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|b| b.title == title) {
            existing.url = url.to_string();
            return Ok(false);
        }
        self.items.push(Bookmark {
            title: title.to_string(),
            url: url.to_string(),
        });
        Ok(true)
    }

    /// URL stored under `title`.
    pub fn get(&self, title: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|b| b.title == title)
            .map(|b| b.url.as_str())
    }

    pub fn remove(&mut self, title: &str) -> Option<Bookmark> {
        let pos = self.items.iter().position(|b| b.title == title)?;
        Some(self.items.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut bm = Bookmarks::new();
        assert_eq!(bm.add("Rust", "https://www.rust-lang.org/"), Ok(true));
        assert_eq!(bm.get("Rust"), Some("https://www.rust-lang.org/"));
        assert_eq!(bm.len(), 1);
    }

    #[test]
    fn test_same_title_replaces_url_in_place() {
        let mut bm = Bookmarks::new();
        bm.add("A", "https://a.example/").unwrap();
        bm.add("B", "https://b.example/").unwrap();
        assert_eq!(bm.add("A", "https://a2.example/"), Ok(false));
        let titles: Vec<_> = bm.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(bm.get("A"), Some("https://a2.example/"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut bm = Bookmarks::new();
        assert_eq!(bm.add("   ", "https://x.example/"), Err(BookmarkError::EmptyTitle));
        assert!(bm.is_empty());
    }

    #[test]
    fn test_overlong_title_rejected() {
        let mut bm = Bookmarks::new();
        let title = "x".repeat(MAX_BOOKMARK_TITLE_CHARS + 1);
        assert!(matches!(
            bm.add(&title, "https://x.example/"),
            Err(BookmarkError::TitleTooLong { .. })
        ));
    }

    #[test]
    fn test_remove() {
        let mut bm = Bookmarks::new();
        bm.add("A", "https://a.example/").unwrap();
        assert_eq!(bm.remove("A").map(|b| b.url), Some("https://a.example/".to_string()));
        assert!(bm.remove("A").is_none());
    }
}
