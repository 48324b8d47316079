use crate::actions::CustomTabListAction;
use crate::state::BrowserState;

/// Custom tabs are never selected, so none of these touch `selected_tab_id`
pub fn reduce_custom_tab_list(mut state: BrowserState, action: &CustomTabListAction) -> BrowserState {
    match action {
        CustomTabListAction::AddCustomTab { tab } => {
            if state.contains_id(&tab.id) {
                log::warn!("Tab {} already exists, ignoring custom tab add", tab.id);
            } else {
                state.custom_tabs.push(tab.clone());
            }
        }
        CustomTabListAction::RemoveCustomTab { id } => {
            state.custom_tabs.retain(|tab| &tab.id != id);
        }
        CustomTabListAction::RemoveAllCustomTabs => {
            state.custom_tabs.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{TabId, TabSessionState};

    #[test]
    fn test_add_and_remove_custom_tab() {
        let state = BrowserState::default();
        let state = reduce_custom_tab_list(
            state,
            &CustomTabListAction::AddCustomTab {
                tab: TabSessionState::with_id("x", "https://example.org"),
            },
        );

        assert_eq!(state.custom_tabs.len(), 1);
        assert!(state.tabs.is_empty());
        assert_eq!(state.selected_tab_id, None);

        let state = reduce_custom_tab_list(
            state,
            &CustomTabListAction::RemoveCustomTab {
                id: TabId::from("x"),
            },
        );
        assert!(state.custom_tabs.is_empty());
    }

    #[test]
    fn test_custom_tab_with_taken_id_is_ignored() {
        let state = BrowserState::new(
            vec![TabSessionState::with_id("a", "https://www.mozilla.org")],
            Some(TabId::from("a")),
        );
        let after = reduce_custom_tab_list(
            state.clone(),
            &CustomTabListAction::AddCustomTab {
                tab: TabSessionState::with_id("a", "https://example.org"),
            },
        );

        assert_eq!(after, state);
    }

    #[test]
    fn test_remove_all_custom_tabs_keeps_tabs() {
        let mut state = BrowserState::new(
            vec![TabSessionState::with_id("a", "https://www.mozilla.org")],
            Some(TabId::from("a")),
        );
        state.custom_tabs = vec![
            TabSessionState::with_id("x", "https://example.org"),
            TabSessionState::with_id("y", "https://example.com"),
        ];

        let state = reduce_custom_tab_list(state, &CustomTabListAction::RemoveAllCustomTabs);
        assert!(state.custom_tabs.is_empty());
        assert_eq!(state.tabs.len(), 1);
    }
}
