//! Tab List Reducer
//!
//! Owns `tabs` and `selected_tab_id`. Every operation is total: unknown ids
//! and duplicate ids are no-ops, never errors, because actions routinely race
//! against tab lifecycle events coming from elsewhere.
//!
//! After every reduction:
//! - `selected_tab_id` is `None` or the id of an entry of `tabs`
//! - ids are unique across `tabs` and `custom_tabs`
//! - children are placed right after the last descendant of their parent

use std::collections::HashSet;

use crate::actions::TabListAction;
use crate::state::{BrowserState, TabId, TabSessionState};

pub fn reduce_tab_list(state: BrowserState, action: &TabListAction) -> BrowserState {
    match action {
        TabListAction::AddTab {
            tab,
            select,
            parent_id,
        } => add_tab(state, tab, *select, parent_id.as_ref()),
        TabListAction::AddMultipleTabs { tabs } => add_multiple_tabs(state, tabs),
        TabListAction::SelectTab { id } => select_tab(state, id),
        TabListAction::RemoveTab {
            id,
            select_parent_if_exists,
        } => remove_tab(state, id, *select_parent_if_exists),
        TabListAction::Restore {
            tabs,
            selected_tab_id,
        } => restore(state, tabs, selected_tab_id.as_ref()),
        TabListAction::RemoveAllTabs => {
            let mut state = state;
            state.tabs.clear();
            state.selected_tab_id = None;
            state
        }
        TabListAction::RemoveAllPrivateTabs => remove_partition(state, true),
        TabListAction::RemoveAllNormalTabs => remove_partition(state, false),
    }
}

fn add_tab(
    mut state: BrowserState,
    tab: &TabSessionState,
    select: bool,
    parent_id: Option<&TabId>,
) -> BrowserState {
    if state.contains_id(&tab.id) {
        log::warn!("Tab {} already exists, ignoring add", tab.id);
        return state;
    }

    let mut tab = tab.clone();
    if let Some(parent_id) = parent_id {
        tab.parent_id = Some(parent_id.clone());
    }

    let was_empty = state.tabs.is_empty();
    let index = tab
        .parent_id
        .as_ref()
        .and_then(|parent_id| child_insertion_index(&state.tabs, parent_id))
        .unwrap_or(state.tabs.len());

    let id = tab.id.clone();
    state.tabs.insert(index, tab);

    if select || was_empty {
        state.selected_tab_id = Some(id);
    }
    state
}

fn add_multiple_tabs(mut state: BrowserState, tabs: &[TabSessionState]) -> BrowserState {
    let added = unique_new_tabs(&state, tabs);

    if state.selected_tab_id.is_none() {
        state.selected_tab_id = added.iter().find(|tab| !tab.private).map(|tab| tab.id.clone());
    }
    state.tabs.extend(added);
    state
}

fn select_tab(mut state: BrowserState, id: &TabId) -> BrowserState {
    if state.find_tab(id).is_some() {
        state.selected_tab_id = Some(id.clone());
    } else {
        log::debug!("Cannot select unknown tab {}", id);
    }
    state
}

fn remove_tab(mut state: BrowserState, id: &TabId, select_parent_if_exists: bool) -> BrowserState {
    let Some(index) = state.tabs.iter().position(|tab| &tab.id == id) else {
        log::debug!("Cannot remove unknown tab {}", id);
        return state;
    };

    // Children keep their (now dangling) parent id
    let removed = state.tabs.remove(index);

    if state.selected_tab_id.as_ref() == Some(&removed.id) {
        state.selected_tab_id =
            next_selected_tab_id(&state.tabs, &removed, index, select_parent_if_exists);
    }
    state
}

fn restore(
    mut state: BrowserState,
    tabs: &[TabSessionState],
    selected_tab_id: Option<&TabId>,
) -> BrowserState {
    let mut restored = unique_new_tabs(&state, tabs);
    restored.append(&mut state.tabs);
    state.tabs = restored;

    if let Some(id) = selected_tab_id {
        if state.find_tab(id).is_some() {
            state.selected_tab_id = Some(id.clone());
        } else {
            log::debug!("Restored selection {} is not a tab, keeping current", id);
        }
    }
    state
}

fn remove_partition(mut state: BrowserState, private: bool) -> BrowserState {
    state.tabs.retain(|tab| tab.private != private);

    // No fallback into the other partition
    let selection_removed = state
        .selected_tab_id
        .as_ref()
        .is_some_and(|id| state.find_tab(id).is_none());
    if selection_removed {
        state.selected_tab_id = None;
    }
    state
}

/// Tabs from `tabs` whose id is not taken yet, in order, without duplicates
fn unique_new_tabs(state: &BrowserState, tabs: &[TabSessionState]) -> Vec<TabSessionState> {
    let mut seen = HashSet::new();
    tabs.iter()
        .filter(|tab| !state.contains_id(&tab.id) && seen.insert(tab.id.clone()))
        .cloned()
        .collect()
}

/// Position right after the last descendant of `parent_id`, or `None` if the
/// parent is not in the list
fn child_insertion_index(tabs: &[TabSessionState], parent_id: &TabId) -> Option<usize> {
    let parent_index = tabs.iter().position(|tab| &tab.id == parent_id)?;

    let mut index = parent_index + 1;
    while index < tabs.len() && is_descendant_of(tabs, &tabs[index], parent_id) {
        index += 1;
    }
    Some(index)
}

fn is_descendant_of(tabs: &[TabSessionState], tab: &TabSessionState, ancestor: &TabId) -> bool {
    let mut current = tab.parent_id.as_ref();

    // Bounded walk, parent ids could form a cycle
    for _ in 0..tabs.len() {
        let Some(parent_id) = current else {
            return false;
        };
        if parent_id == ancestor {
            return true;
        }
        current = tabs
            .iter()
            .find(|candidate| &candidate.id == parent_id)
            .and_then(|parent| parent.parent_id.as_ref());
    }
    false
}

/// Selection continuity after the selected tab was removed from `index`
fn next_selected_tab_id(
    tabs: &[TabSessionState],
    removed: &TabSessionState,
    index: usize,
    select_parent_if_exists: bool,
) -> Option<TabId> {
    if select_parent_if_exists {
        if let Some(parent_id) = &removed.parent_id {
            if tabs.iter().any(|tab| &tab.id == parent_id) {
                return Some(parent_id.clone());
            }
        }
    }

    find_nearby_tab(tabs, index, |tab| tab.private == removed.private).map(|tab| tab.id.clone())
}

/// Nearest tab around the gap at `index` matching `predicate`, trying the
/// next position before the previous one at each distance
fn find_nearby_tab<F>(tabs: &[TabSessionState], index: usize, predicate: F) -> Option<&TabSessionState>
where
    F: Fn(&TabSessionState) -> bool,
{
    let mut distance = 0;
    loop {
        let next = index + distance;
        let previous = index.checked_sub(distance + 1);

        if next >= tabs.len() && previous.is_none() {
            return None;
        }

        if let Some(tab) = tabs.get(next).filter(|tab| predicate(tab)) {
            return Some(tab);
        }
        if let Some(tab) = previous
            .and_then(|previous| tabs.get(previous))
            .filter(|tab| predicate(tab))
        {
            return Some(tab);
        }

        distance += 1;
    }
}
