// Skiff - core/history.rs
//
// Two kinds of history:
//   - VisitLog: the session-wide, append-only list behind the History menu.
//   - NavHistory: one view's back/forward stack, for engines that do not
//     keep their own.

use crate::core::model::Visit;
use crate::util::constants::MAX_HISTORY_ENTRIES;
use chrono::Utc;
use std::collections::VecDeque;

// =============================================================================
// Visit log
// =============================================================================

/// Append-only list of visited pages, oldest first.
///
/// Cleared on restart. Bounded by `MAX_HISTORY_ENTRIES`; the oldest visit is
/// dropped when the bound is reached.
#[derive(Debug, Default)]
pub struct VisitLog {
    visits: VecDeque<Visit>,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visit stamped with the current time.
    pub fn record(&mut self, title: &str, url: &str) {
        if self.visits.len() == MAX_HISTORY_ENTRIES {
            self.visits.pop_front();
        }
        self.visits.push_back(Visit {
            title: title.to_string(),
            url: url.to_string(),
            visited_at: Utc::now(),
        });
    }

    pub fn get(&self, index: usize) -> Option<&Visit> {
        self.visits.get(index)
    }

    /// Visits oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Visit> + ExactSizeIterator {
        self.visits.iter()
    }

    /// Up to `n` visits, newest first, paired with the index `get` accepts.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = (usize, &Visit)> {
        self.visits.iter().enumerate().rev().take(n)
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

// =============================================================================
// Navigation history
// =============================================================================

/// Back/forward stack of a single view.
#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<String>,
    /// Index of the current entry; meaningless while `entries` is empty.
    position: usize,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `url` as the new current entry, discarding any forward entries.
    pub fn navigate(&mut self, url: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
        }
        self.entries.push(url.to_string());
        self.position = self.entries.len() - 1;
    }

    /// Step back. Returns the new current URL, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    /// Step forward. Returns the new current URL, or `None` at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.position).map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.position > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_log_appends_in_order() {
        let mut log = VisitLog::new();
        log.record("A", "https://a.example/");
        log.record("B", "https://b.example/");
        let urls: Vec<_> = log.iter().map(|v| v.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example/", "https://b.example/"]);
    }

    #[test]
    fn test_visit_log_is_bounded() {
        let mut log = VisitLog::new();
        for i in 0..(MAX_HISTORY_ENTRIES + 5) {
            log.record("", &format!("https://e.example/{i}"));
        }
        assert_eq!(log.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(log.get(0).map(|v| v.url.as_str()), Some("https://e.example/5"));
    }

    #[test]
    fn test_recent_is_newest_first_and_capped() {
        let mut log = VisitLog::new();
        for i in 0..5 {
            log.record("", &format!("https://e.example/{i}"));
        }
        let recent: Vec<_> = log.recent(3).map(|(i, v)| (i, v.url.as_str())).collect();
        assert_eq!(
            recent,
            vec![
                (4, "https://e.example/4"),
                (3, "https://e.example/3"),
                (2, "https://e.example/2"),
            ]
        );
        assert_eq!(log.recent(50).count(), 5);
        for (index, visit) in log.recent(5) {
            assert_eq!(log.get(index).map(|v| v.url.as_str()), Some(visit.url.as_str()));
        }
    }

    #[test]
    fn test_nav_history_back_forward() {
        let mut nav = NavHistory::new();
        assert!(!nav.can_go_back());
        nav.navigate("a");
        nav.navigate("b");
        nav.navigate("c");
        assert_eq!(nav.back(), Some("b"));
        assert_eq!(nav.back(), Some("a"));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.forward(), Some("b"));
        assert!(nav.can_go_forward());
    }

    #[test]
    fn test_navigate_truncates_forward_branch() {
        let mut nav = NavHistory::new();
        nav.navigate("a");
        nav.navigate("b");
        nav.back();
        nav.navigate("c");
        assert!(!nav.can_go_forward());
        assert_eq!(nav.len(), 2);
        assert_eq!(nav.back(), Some("a"));
    }
}
