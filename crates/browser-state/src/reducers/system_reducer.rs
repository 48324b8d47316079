use crate::actions::SystemAction;
use crate::state::BrowserState;

pub fn reduce_system(mut state: BrowserState, action: &SystemAction) -> BrowserState {
    match action {
        SystemAction::LowMemory => {
            let selected = state.selected_tab_id.clone();
            for tab in state.tabs.iter_mut().chain(state.custom_tabs.iter_mut()) {
                if Some(&tab.id) != selected.as_ref() {
                    tab.content.thumbnail = None;
                }
            }
        }
    }
    state
}
