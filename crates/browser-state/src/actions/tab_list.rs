//! Tab list actions
//!
//! Mutations of `BrowserState::tabs` and `BrowserState::selected_tab_id`.

use crate::state::{TabId, TabSessionState};

#[derive(Debug, Clone, PartialEq)]
pub enum TabListAction {
    /// Add a tab, optionally selecting it and/or placing it under a parent
    AddTab {
        tab: TabSessionState,
        select: bool,
        /// Overrides `tab.parent_id` when set
        parent_id: Option<TabId>,
    },
    /// Append several tabs at once
    AddMultipleTabs { tabs: Vec<TabSessionState> },
    SelectTab { id: TabId },
    RemoveTab {
        id: TabId,
        select_parent_if_exists: bool,
    },
    /// Put restored tabs ahead of the existing ones
    Restore {
        tabs: Vec<TabSessionState>,
        selected_tab_id: Option<TabId>,
    },
    RemoveAllTabs,
    RemoveAllPrivateTabs,
    RemoveAllNormalTabs,
}

impl TabListAction {
    pub fn add(tab: TabSessionState) -> Self {
        Self::AddTab {
            tab,
            select: false,
            parent_id: None,
        }
    }

    pub fn add_and_select(tab: TabSessionState) -> Self {
        Self::AddTab {
            tab,
            select: true,
            parent_id: None,
        }
    }

    pub fn add_child(tab: TabSessionState, parent_id: impl Into<TabId>) -> Self {
        Self::AddTab {
            tab,
            select: false,
            parent_id: Some(parent_id.into()),
        }
    }

    pub fn select(id: impl Into<TabId>) -> Self {
        Self::SelectTab { id: id.into() }
    }

    /// Remove a tab, selecting its parent if it was selected and the parent exists
    pub fn remove(id: impl Into<TabId>) -> Self {
        Self::RemoveTab {
            id: id.into(),
            select_parent_if_exists: true,
        }
    }
}
