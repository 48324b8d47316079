//! Content Reducer
//!
//! Replaces the content of one tab (or custom tab) at its current position.

use crate::actions::ContentAction;
use crate::state::{BrowserState, ContentState, TabId};

pub fn reduce_content(state: BrowserState, action: &ContentAction) -> BrowserState {
    update_content(state, action.tab_id(), |content| match action {
        ContentAction::UpdateUrl { url, .. } => content.url = url.clone(),
        ContentAction::UpdateTitle { title, .. } => content.title = title.clone(),
        ContentAction::UpdateProgress { progress, .. } => content.progress = (*progress).min(100),
        ContentAction::UpdateLoadingState { loading, .. } => content.loading = *loading,
        ContentAction::UpdateSearchTerms { search_terms, .. } => {
            content.search_terms = search_terms.clone()
        }
        ContentAction::UpdateSecurityInfo { security_info, .. } => {
            content.security_info = security_info.clone()
        }
        ContentAction::UpdateThumbnail { thumbnail, .. } => {
            content.thumbnail = Some(thumbnail.clone())
        }
        ContentAction::RemoveThumbnail { .. } => content.thumbnail = None,
    })
}

fn update_content<F>(mut state: BrowserState, id: &TabId, update: F) -> BrowserState
where
    F: FnOnce(&mut ContentState),
{
    let tab = state
        .tabs
        .iter_mut()
        .chain(state.custom_tabs.iter_mut())
        .find(|tab| &tab.id == id);

    match tab {
        Some(tab) => update(&mut tab.content),
        None => log::debug!("Content update for unknown tab {}", id),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{TabSessionState, Thumbnail};

    fn state() -> BrowserState {
        let mut state = BrowserState::new(
            vec![
                TabSessionState::with_id("a", "https://www.mozilla.org"),
                TabSessionState::with_id("b", "https://www.firefox.com"),
            ],
            Some(TabId::from("a")),
        );
        state.custom_tabs = vec![TabSessionState::with_id("x", "https://example.org")];
        state
    }

    #[test]
    fn test_update_url_keeps_position() {
        let state = reduce_content(
            state(),
            &ContentAction::UpdateUrl {
                id: TabId::from("b"),
                url: "https://getpocket.com".to_string(),
            },
        );

        assert_eq!(state.tabs[1].id.as_str(), "b");
        assert_eq!(state.tabs[1].content.url, "https://getpocket.com");
        assert_eq!(state.tabs[0].content.url, "https://www.mozilla.org");
    }

    #[test]
    fn test_update_custom_tab_title() {
        let state = reduce_content(
            state(),
            &ContentAction::UpdateTitle {
                id: TabId::from("x"),
                title: "Example".to_string(),
            },
        );

        assert_eq!(state.custom_tabs[0].content.title, "Example");
    }

    #[test]
    fn test_progress_is_clamped() {
        let state = reduce_content(
            state(),
            &ContentAction::UpdateProgress {
                id: TabId::from("a"),
                progress: 250,
            },
        );

        assert_eq!(state.tabs[0].content.progress, 100);
    }

    #[test]
    fn test_thumbnail_update_and_remove() {
        let id = TabId::from("a");
        let state = reduce_content(
            state(),
            &ContentAction::UpdateThumbnail {
                id: id.clone(),
                thumbnail: Thumbnail::new(vec![1, 2, 3]),
            },
        );
        assert!(state.tabs[0].content.thumbnail.is_some());

        let state = reduce_content(state, &ContentAction::RemoveThumbnail { id });
        assert!(state.tabs[0].content.thumbnail.is_none());
    }

    #[test]
    fn test_unknown_tab_is_noop() {
        let before = state();
        let after = reduce_content(
            before.clone(),
            &ContentAction::UpdateLoadingState {
                id: TabId::from("zzz"),
                loading: true,
            },
        );

        assert_eq!(after, before);
    }
}
