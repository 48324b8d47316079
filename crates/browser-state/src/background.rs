//! Store worker thread
//!
//! All actions are processed on a single thread, strictly one at a time and
//! in the order they were accepted:
//!
//! - the action runs through the middleware chain and ends in the reducer
//! - the reduced state is committed (only if it differs from the current one)
//! - subscribers are notified with the committed state
//! - follow-up actions dispatched by middleware through the context run next,
//!   before any other queued action
//!
//! The completion handle of an action resolves after all of the above.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;

use crate::actions::Action;
use crate::dispatcher::{Dispatcher, Envelope};
use crate::middleware::{Middleware, MiddlewareContext, Next};
use crate::reducer::Reducer;
use crate::state::BrowserState;
use crate::subscription::SubscriberRegistry;

/// Shared state that any thread can read (only the worker writes)
pub(crate) type SharedState = Arc<RwLock<Arc<BrowserState>>>;

pub(crate) fn read_state(state: &SharedState) -> Arc<BrowserState> {
    let state = state.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&state)
}

/// Everything the worker owns
pub(crate) struct Worker {
    pub(crate) state: SharedState,
    pub(crate) reducer: Reducer,
    pub(crate) middleware: Vec<Box<dyn Middleware>>,
    pub(crate) subscribers: Arc<SubscriberRegistry>,
    pub(crate) dispatcher: Dispatcher,
}

/// Spawn the store worker thread
pub(crate) fn spawn_worker(rx: Receiver<Envelope>, worker: Worker) -> thread::JoinHandle<()> {
    thread::spawn(move || worker.run(rx))
}

impl Worker {
    fn run(mut self, rx: Receiver<Envelope>) {
        self.subscribers.set_worker(thread::current().id());
        log::info!("Store worker started");

        // The worker holds a Dispatcher itself, so the channel only ends on Shutdown
        for envelope in rx.iter() {
            match envelope {
                Envelope::Dispatch { action, done } => {
                    self.process(action);
                    // Nobody waiting is fine
                    let _ = done.send(());
                }
                Envelope::Shutdown => {
                    log::info!("Store worker received shutdown signal");
                    break;
                }
            }
        }

        log::info!("Store worker stopped");
    }

    fn process(&mut self, action: Action) {
        let Worker {
            state,
            reducer,
            middleware,
            subscribers,
            dispatcher,
        } = self;

        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            let ctx = MiddlewareContext::new(Arc::clone(state), dispatcher.clone());
            let mut commit = |action: Action| {
                let current = read_state(state);
                let next = reducer(BrowserState::clone(&current), &action);
                if next == *current {
                    log::trace!("No state change for {:?}", action);
                    return;
                }

                let next = Arc::new(next);
                *state.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&next);
                subscribers.notify(&next);
            };

            Next::new(&ctx, &mut middleware[..], &mut commit).run(action);
            queue.extend(ctx.take_pending());
        }
    }
}
