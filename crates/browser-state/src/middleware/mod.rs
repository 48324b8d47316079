use std::cell::RefCell;
use std::sync::Arc;

use crate::actions::Action;
use crate::background::{read_state, SharedState};
use crate::dispatcher::Dispatcher;
use crate::state::BrowserState;

pub mod logging;
pub mod recently_closed_middleware;
pub mod session_middleware;

pub use logging::LoggingMiddleware;
pub use recently_closed_middleware::RecentlyClosedMiddleware;
pub use session_middleware::SessionMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the store worker thread, in registration order. Each one
/// decides what happens to the action:
///
/// - pass it on unchanged with `next.run(action)`
/// - pass on a different action instead
/// - drop it by not calling `next` at all
///
/// Code placed after `next.run(..)` observes the state produced by the
/// reducer. Blocking work (file or network I/O) belongs on a runtime owned by
/// the middleware, reporting back through [`MiddlewareContext::dispatcher`].
pub trait Middleware: Send {
    fn handle(&mut self, ctx: &MiddlewareContext, next: Next<'_>, action: Action);
}

/// What a middleware can see and do while handling an action
pub struct MiddlewareContext {
    state: SharedState,
    dispatcher: Dispatcher,
    pending: RefCell<Vec<Action>>,
}

impl MiddlewareContext {
    pub(crate) fn new(state: SharedState, dispatcher: Dispatcher) -> Self {
        Self {
            state,
            dispatcher,
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Latest committed state
    pub fn state(&self) -> Arc<BrowserState> {
        read_state(&self.state)
    }

    /// Dispatch a follow-up action
    ///
    /// It runs through the full chain once the current action is done, before
    /// anything else waiting in the queue. The handle of the current action
    /// resolves only after the follow-ups have been processed.
    pub fn dispatch(&self, action: impl Into<Action>) {
        self.pending.borrow_mut().push(action.into());
    }

    /// Dispatcher for work that completes later (background tasks)
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub(crate) fn take_pending(&self) -> Vec<Action> {
        self.pending.take()
    }
}

/// Rest of the middleware chain, ending in the reducer
pub struct Next<'a> {
    ctx: &'a MiddlewareContext,
    chain: &'a mut [Box<dyn Middleware>],
    reduce: &'a mut dyn FnMut(Action),
}

impl<'a> Next<'a> {
    pub(crate) fn new(
        ctx: &'a MiddlewareContext,
        chain: &'a mut [Box<dyn Middleware>],
        reduce: &'a mut dyn FnMut(Action),
    ) -> Self {
        Self { ctx, chain, reduce }
    }

    /// Hand `action` to the next middleware, or to the reducer at the end
    pub fn run(self, action: Action) {
        let Next { ctx, chain, reduce } = self;
        match chain.split_first_mut() {
            Some((middleware, rest)) => {
                middleware.handle(ctx, Next::new(ctx, rest, reduce), action)
            }
            None => reduce(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TabListAction;
    use std::sync::mpsc;
    use std::sync::RwLock;

    struct Record(&'static str, Arc<std::sync::Mutex<Vec<String>>>);

    impl Middleware for Record {
        fn handle(&mut self, _ctx: &MiddlewareContext, next: Next<'_>, action: Action) {
            self.1.lock().unwrap().push(format!("{} before", self.0));
            next.run(action);
            self.1.lock().unwrap().push(format!("{} after", self.0));
        }
    }

    struct Swallow;

    impl Middleware for Swallow {
        fn handle(&mut self, _ctx: &MiddlewareContext, _next: Next<'_>, _action: Action) {}
    }

    fn context() -> MiddlewareContext {
        let (tx, _rx) = mpsc::channel();
        MiddlewareContext::new(
            Arc::new(RwLock::new(Arc::new(BrowserState::default()))),
            Dispatcher::new(tx),
        )
    }

    #[test]
    fn test_chain_runs_in_order_around_reducer() {
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut chain: Vec<Box<dyn Middleware>> = vec![
            Box::new(Record("first", Arc::clone(&log))),
            Box::new(Record("second", Arc::clone(&log))),
        ];
        let ctx = context();
        let reducer_log = Arc::clone(&log);
        let mut reduce = |_action: Action| {
            reducer_log.lock().unwrap().push("reduce".to_string());
        };

        Next::new(&ctx, &mut chain, &mut reduce).run(TabListAction::RemoveAllTabs.into());

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "first before",
                "second before",
                "reduce",
                "second after",
                "first after"
            ]
        );
    }

    #[test]
    fn test_middleware_can_swallow_action() {
        let mut chain: Vec<Box<dyn Middleware>> = vec![Box::new(Swallow)];
        let ctx = context();
        let mut reduced = 0;
        let mut reduce = |_action: Action| reduced += 1;

        Next::new(&ctx, &mut chain, &mut reduce).run(TabListAction::RemoveAllTabs.into());

        assert_eq!(reduced, 0);
    }

    #[test]
    fn test_context_queues_follow_ups() {
        let ctx = context();
        ctx.dispatch(TabListAction::RemoveAllPrivateTabs);
        ctx.dispatch(TabListAction::RemoveAllNormalTabs);

        assert_eq!(
            ctx.take_pending(),
            vec![
                Action::TabList(TabListAction::RemoveAllPrivateTabs),
                Action::TabList(TabListAction::RemoveAllNormalTabs),
            ]
        );
        assert!(ctx.take_pending().is_empty());
    }
}
