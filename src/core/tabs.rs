// Skiff - core/tabs.rs
//
// Ordered set of open tabs and the current-tab cursor.
//
// Each tab owns exactly one engine view. Tabs are addressed by position for
// user actions (click, close, move) and by ViewId for engine events, so
// reordering never sends a title to the wrong tab.

use crate::core::model::{Profile, ViewId};

/// One open tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// The engine view rendered in this tab.
    pub view: ViewId,
    /// Storage context the view was created with.
    pub profile: Profile,
    /// Label shown in the tab strip.
    pub title: String,
    /// Last URL reported by the engine.
    pub url: String,
}

/// Ordered collection of tabs with a current index.
///
/// Invariant: when non-empty, `current < tabs.len()`.
#[derive(Debug, Default)]
pub struct TabSet {
    tabs: Vec<Tab>,
    current: usize,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Append a tab and make it current. Returns its index.
    pub fn open(&mut self, view: ViewId, profile: Profile, label: &str, url: &str) -> usize {
        self.tabs.push(Tab {
            view,
            profile,
            title: label.to_string(),
            url: url.to_string(),
        });
        self.current = self.tabs.len() - 1;
        self.current
    }

    /// Remove the tab at `index`.
    ///
    /// Refuses (returns `None`) when fewer than two tabs are open, so the
    /// window always keeps one tab. Removing the current tab selects its
    /// right neighbour (or the new last tab); removing any other tab keeps
    /// the same tab current.
    pub fn close(&mut self, index: usize) -> Option<Tab> {
        if self.tabs.len() < 2 || index >= self.tabs.len() {
            return None;
        }
        let removed = self.tabs.remove(index);
        if index < self.current || self.current >= self.tabs.len() {
            self.current = self.current.saturating_sub(1);
        }
        Some(removed)
    }

    /// Make the tab at `index` current. Returns false if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.tabs.is_empty()).then_some(self.current)
    }

    pub fn current(&self) -> Option<&Tab> {
        self.tabs.get(self.current)
    }

    pub fn current_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.get_mut(self.current)
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    /// Position of the tab showing `view`.
    pub fn find_by_view(&self, view: ViewId) -> Option<usize> {
        self.tabs.iter().position(|t| t.view == view)
    }

    pub fn by_view_mut(&mut self, view: ViewId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.view == view)
    }

    /// Move a tab from `from` to `to`, keeping the same tab current.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        let len = self.tabs.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let current_view = self.tabs[self.current].view;
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        if let Some(idx) = self.find_by_view(current_view) {
            self.current = idx;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(n: u64) -> TabSet {
        let mut tabs = TabSet::new();
        for i in 0..n {
            tabs.open(ViewId(i), Profile::Normal, "New Tab", "about:blank");
        }
        tabs
    }

    #[test]
    fn test_open_makes_new_tab_current() {
        let mut tabs = set_with(2);
        assert_eq!(tabs.current_index(), Some(1));
        let idx = tabs.open(ViewId(9), Profile::Private(1), "x", "about:blank");
        assert_eq!(idx, 2);
        assert_eq!(tabs.current().map(|t| t.view), Some(ViewId(9)));
    }

    #[test]
    fn test_closing_last_remaining_tab_is_noop() {
        let mut tabs = set_with(1);
        assert!(tabs.close(0).is_none());
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn test_close_out_of_range_is_noop() {
        let mut tabs = set_with(2);
        assert!(tabs.close(5).is_none());
        assert_eq!(tabs.len(), 2);
    }

    #[test]
    fn test_close_current_last_tab_moves_cursor_left() {
        let mut tabs = set_with(3);
        let removed = tabs.close(2).unwrap();
        assert_eq!(removed.view, ViewId(2));
        assert_eq!(tabs.current_index(), Some(1));
    }

    #[test]
    fn test_close_tab_before_current_keeps_same_tab_current() {
        let mut tabs = set_with(3);
        tabs.select(2);
        tabs.close(0);
        assert_eq!(tabs.current().map(|t| t.view), Some(ViewId(2)));
    }

    #[test]
    fn test_close_tab_after_current_keeps_cursor() {
        let mut tabs = set_with(3);
        tabs.select(0);
        tabs.close(2);
        assert_eq!(tabs.current().map(|t| t.view), Some(ViewId(0)));
    }

    #[test]
    fn test_move_tab_preserves_current_tab_and_lookup() {
        let mut tabs = set_with(3);
        tabs.select(0);
        assert!(tabs.move_tab(0, 2));
        assert_eq!(tabs.current_index(), Some(2));
        assert_eq!(tabs.find_by_view(ViewId(0)), Some(2));
        assert_eq!(tabs.find_by_view(ViewId(1)), Some(0));
    }

    #[test]
    fn test_select_out_of_range_rejected() {
        let mut tabs = set_with(2);
        assert!(!tabs.select(2));
        assert_eq!(tabs.current_index(), Some(1));
    }
}
