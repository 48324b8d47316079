//! Recently Closed Middleware
//!
//! Records normal tabs removed from the tab list so they can be restored
//! later. Private tabs are never recorded.

use crate::actions::{Action, RecentlyClosedAction, TabListAction};
use crate::middleware::{Middleware, MiddlewareContext, Next};
use crate::state::{BrowserState, RecoverableTab};

#[derive(Debug, Default)]
pub struct RecentlyClosedMiddleware;

impl RecentlyClosedMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Normal tabs `action` is about to remove from `state`
    fn closing(state: &BrowserState, action: &TabListAction) -> Vec<RecoverableTab> {
        match action {
            TabListAction::RemoveTab { id, .. } => state
                .find_tab(id)
                .filter(|tab| !tab.private)
                .map(RecoverableTab::from)
                .into_iter()
                .collect(),
            TabListAction::RemoveAllTabs | TabListAction::RemoveAllNormalTabs => {
                state.normal_tabs().map(RecoverableTab::from).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl Middleware for RecentlyClosedMiddleware {
    fn handle(&mut self, ctx: &MiddlewareContext, next: Next<'_>, action: Action) {
        let closing = match &action {
            Action::TabList(tab_action) => Self::closing(&ctx.state(), tab_action),
            _ => Vec::new(),
        };

        next.run(action);

        if closing.is_empty() {
            return;
        }

        // Only record what the reducer (and later middleware) actually removed
        let state = ctx.state();
        let closed: Vec<RecoverableTab> = closing
            .into_iter()
            .filter(|tab| state.find_tab(&tab.id).is_none())
            .collect();
        if !closed.is_empty() {
            log::debug!("RecentlyClosedMiddleware: recording {} tab(s)", closed.len());
            ctx.dispatch(RecentlyClosedAction::AddClosedTabs(closed));
        }
    }
}
