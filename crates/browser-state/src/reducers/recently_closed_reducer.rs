use std::collections::HashSet;

use crate::actions::RecentlyClosedAction;
use crate::state::RecentlyClosedState;

/// Keeps the newest closed tabs first, without duplicates, up to `max_size`
pub fn reduce_recently_closed(
    mut state: RecentlyClosedState,
    action: &RecentlyClosedAction,
) -> RecentlyClosedState {
    match action {
        RecentlyClosedAction::AddClosedTabs(tabs) => {
            let mut seen = HashSet::new();
            let mut merged: Vec<_> = tabs
                .iter()
                .chain(state.tabs.iter())
                .filter(|tab| seen.insert(tab.id.clone()))
                .cloned()
                .collect();
            merged.truncate(state.max_size);
            state.tabs = merged;
        }
        RecentlyClosedAction::RemoveClosedTab(id) => {
            state.tabs.retain(|tab| &tab.id != id);
        }
        RecentlyClosedAction::RemoveAllClosedTabs => {
            state.tabs.clear();
        }
    }
    state
}
