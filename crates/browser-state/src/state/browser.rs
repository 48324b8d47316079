//! Browser State
//!
//! The whole browser model as one immutable snapshot. The store replaces it
//! wholesale on every committed action.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DownloadState, RecentlyClosedState, TabId, TabSessionState};

/// Browser state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserState {
    /// Regular tabs in display (tree) order
    pub tabs: Vec<TabSessionState>,
    /// Custom tabs, never selected and never part of `tabs`
    pub custom_tabs: Vec<TabSessionState>,
    /// Always `None` or the id of an entry of `tabs`
    pub selected_tab_id: Option<TabId>,
    pub downloads: BTreeMap<String, DownloadState>,
    pub closed_tabs: RecentlyClosedState,
}

impl BrowserState {
    pub fn new(tabs: Vec<TabSessionState>, selected_tab_id: Option<TabId>) -> Self {
        Self {
            tabs,
            selected_tab_id,
            ..Self::default()
        }
    }

    pub fn find_tab(&self, id: &TabId) -> Option<&TabSessionState> {
        self.tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn find_custom_tab(&self, id: &TabId) -> Option<&TabSessionState> {
        self.custom_tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn find_tab_or_custom_tab(&self, id: &TabId) -> Option<&TabSessionState> {
        self.find_tab(id).or_else(|| self.find_custom_tab(id))
    }

    pub fn selected_tab(&self) -> Option<&TabSessionState> {
        self.selected_tab_id
            .as_ref()
            .and_then(|id| self.find_tab(id))
    }

    pub fn private_tabs(&self) -> impl Iterator<Item = &TabSessionState> {
        self.tabs.iter().filter(|tab| tab.private)
    }

    pub fn normal_tabs(&self) -> impl Iterator<Item = &TabSessionState> {
        self.tabs.iter().filter(|tab| !tab.private)
    }

    /// Direct children of `parent_id`, in display order
    pub fn children_of<'a>(
        &'a self,
        parent_id: &'a TabId,
    ) -> impl Iterator<Item = &'a TabSessionState> + 'a {
        self.tabs
            .iter()
            .filter(move |tab| tab.parent_id.as_ref() == Some(parent_id))
    }

    /// True if a tab or custom tab with this id exists
    pub fn contains_id(&self, id: &TabId) -> bool {
        self.find_tab_or_custom_tab(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BrowserState {
        let mut state = BrowserState::new(
            vec![
                TabSessionState::with_id("a", "https://www.mozilla.org").private(true),
                TabSessionState::with_id("b", "https://www.firefox.com"),
                TabSessionState::with_id("c", "https://getpocket.com").parent("b"),
            ],
            Some(TabId::from("b")),
        );
        state.custom_tabs = vec![TabSessionState::with_id("x", "https://example.org")];
        state
    }

    #[test]
    fn test_selected_tab() {
        let state = state();
        assert_eq!(state.selected_tab().map(|t| t.id.as_str()), Some("b"));
    }

    #[test]
    fn test_selected_tab_never_resolves_custom_tab() {
        let mut state = state();
        state.selected_tab_id = Some(TabId::from("x"));
        assert!(state.selected_tab().is_none());
    }

    #[test]
    fn test_partitions() {
        let state = state();
        let private: Vec<_> = state.private_tabs().map(|t| t.id.as_str()).collect();
        let normal: Vec<_> = state.normal_tabs().map(|t| t.id.as_str()).collect();
        assert_eq!(private, vec!["a"]);
        assert_eq!(normal, vec!["b", "c"]);
    }

    #[test]
    fn test_find_tab_or_custom_tab() {
        let state = state();
        assert!(state.find_tab(&TabId::from("x")).is_none());
        assert!(state.find_tab_or_custom_tab(&TabId::from("x")).is_some());
        assert!(state.contains_id(&TabId::from("c")));
        assert!(!state.contains_id(&TabId::from("z")));
    }

    #[test]
    fn test_children_of() {
        let state = state();
        let parent = TabId::from("b");
        let children: Vec<_> = state.children_of(&parent).map(|t| t.id.as_str()).collect();
        assert_eq!(children, vec!["c"]);
    }
}
