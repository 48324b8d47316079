use crate::actions::Action;
use crate::reducers::{
    reduce_content, reduce_custom_tab_list, reduce_download, reduce_recently_closed,
    reduce_system, reduce_tab_list,
};
use crate::state::BrowserState;

/// A pure function producing the next state from the current state + action
pub type Reducer = Box<dyn Fn(BrowserState, &Action) -> BrowserState + Send>;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each action to the sub-reducer owning
/// the affected part of the state
pub fn reduce(mut state: BrowserState, action: &Action) -> BrowserState {
    match action {
        Action::TabList(action) => reduce_tab_list(state, action),
        Action::CustomTabList(action) => reduce_custom_tab_list(state, action),
        Action::Content(action) => reduce_content(state, action),
        Action::Download(action) => reduce_download(state, action),
        Action::RecentlyClosed(action) => {
            state.closed_tabs = reduce_recently_closed(state.closed_tabs, action);
            state
        }
        Action::System(action) => reduce_system(state, action),
        // Side effects only, handled by middleware
        Action::Session(_) => state,
    }
}

/// Run `reducers` in order, each one receiving the previous one's output
pub fn combine_reducers(reducers: Vec<Reducer>) -> Reducer {
    Box::new(move |state, action| {
        reducers
            .iter()
            .fold(state, |state, reducer| reducer(state, action))
    })
}
