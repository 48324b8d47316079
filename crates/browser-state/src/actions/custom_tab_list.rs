use crate::state::{TabId, TabSessionState};

/// Custom tab actions (tabs opened on behalf of another app)
#[derive(Debug, Clone, PartialEq)]
pub enum CustomTabListAction {
    AddCustomTab { tab: TabSessionState },
    RemoveCustomTab { id: TabId },
    RemoveAllCustomTabs,
}
