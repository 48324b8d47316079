//! Target
//!
//! Lets a consumer say which tab it cares about (the selected one, a specific
//! tab or a custom tab) and look it up in any snapshot.

use super::{BrowserState, TabId, TabSessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Whatever tab is currently selected
    SelectedTab,
    /// A specific regular tab
    Tab(TabId),
    /// A specific custom tab
    CustomTab(TabId),
}

impl Target {
    pub fn lookup_in<'a>(&self, state: &'a BrowserState) -> Option<&'a TabSessionState> {
        match self {
            Target::SelectedTab => state.selected_tab(),
            Target::Tab(id) => state.find_tab(id),
            Target::CustomTab(id) => state.find_custom_tab(id),
        }
    }
}
