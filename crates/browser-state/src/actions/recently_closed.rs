use crate::state::{RecoverableTab, TabId};

/// Recently closed tab actions
#[derive(Debug, Clone, PartialEq)]
pub enum RecentlyClosedAction {
    /// Record closed tabs (newest first)
    AddClosedTabs(Vec<RecoverableTab>),
    RemoveClosedTab(TabId),
    RemoveAllClosedTabs,
}
