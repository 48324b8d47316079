//! Recently closed tabs
//!
//! Closed normal tabs are kept as [`RecoverableTab`]s so they can be restored
//! later (undo close). The list is ordered newest first.

use serde::{Deserialize, Serialize};

use super::{TabId, TabSessionState};

/// Default capacity of the recently closed list
pub const DEFAULT_MAX_CLOSED_TABS: usize = 10;

/// A tab that is no longer open but can be restored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableTab {
    pub id: TabId,
    pub url: String,
    pub parent_id: Option<TabId>,
    pub title: String,
    pub private: bool,
}

impl RecoverableTab {
    /// Turn this back into an open tab, keeping its id
    pub fn into_tab_session(self) -> TabSessionState {
        let mut tab = TabSessionState::with_id(self.id, self.url)
            .private(self.private)
            .title(self.title);
        tab.parent_id = self.parent_id;
        tab
    }
}

impl From<&TabSessionState> for RecoverableTab {
    fn from(tab: &TabSessionState) -> Self {
        Self {
            id: tab.id.clone(),
            url: tab.content.url.clone(),
            parent_id: tab.parent_id.clone(),
            title: tab.content.title.clone(),
            private: tab.private,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentlyClosedState {
    pub tabs: Vec<RecoverableTab>,
    pub max_size: usize,
}

impl RecentlyClosedState {
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            tabs: Vec::new(),
            max_size,
        }
    }
}

impl Default for RecentlyClosedState {
    fn default() -> Self {
        Self::with_max_size(DEFAULT_MAX_CLOSED_TABS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_tab_keeps_identity() {
        let tab = TabSessionState::with_id("a", "https://www.mozilla.org")
            .parent("p")
            .title("Mozilla");

        let recoverable = RecoverableTab::from(&tab);
        assert_eq!(recoverable.title, "Mozilla");

        let restored = recoverable.into_tab_session();
        assert_eq!(restored.id, tab.id);
        assert_eq!(restored.parent_id, tab.parent_id);
        assert_eq!(restored.content.url, tab.content.url);
        assert!(!restored.private);
    }
}
