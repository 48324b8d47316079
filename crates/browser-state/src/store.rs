use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::unbounded_channel;

use crate::actions::Action;
use crate::background::{read_state, spawn_worker, SharedState, Worker};
use crate::dispatcher::{DispatchHandle, Dispatcher};
use crate::middleware::Middleware;
use crate::reducer::{reduce, Reducer};
use crate::state::BrowserState;
use crate::subscription::{Callback, StateStream, SubscriberRegistry, Subscription};

/// Store - holds the browser state and runs the dispatch loop
///
/// Cheap to clone, every clone talks to the same worker. The worker stops on
/// [`Store::shutdown`] or when the last clone is dropped.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: SharedState,
    dispatcher: Dispatcher,
    subscribers: Arc<SubscriberRegistry>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Store {
    pub fn new(initial_state: BrowserState, middleware: Vec<Box<dyn Middleware>>) -> Self {
        Self::with_reducer(initial_state, Box::new(reduce), middleware)
    }

    /// Store running a custom reducer instead of the built-in one
    pub fn with_reducer(
        initial_state: BrowserState,
        reducer: Reducer,
        middleware: Vec<Box<dyn Middleware>>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state: SharedState = Arc::new(RwLock::new(Arc::new(initial_state)));
        let subscribers = Arc::new(SubscriberRegistry::default());

        let handle = spawn_worker(
            rx,
            Worker {
                state: Arc::clone(&state),
                reducer,
                middleware,
                subscribers: Arc::clone(&subscribers),
                dispatcher: dispatcher.clone(),
            },
        );

        Self {
            inner: Arc::new(StoreInner {
                state,
                dispatcher,
                subscribers,
                worker: Mutex::new(Some(handle)),
            }),
        }
    }

    /// Queue an action, see [`Dispatcher::dispatch`]
    pub fn dispatch(&self, action: impl Into<Action>) -> DispatchHandle {
        self.inner.dispatcher.dispatch(action)
    }

    /// Latest committed state
    pub fn state(&self) -> Arc<BrowserState> {
        read_state(&self.inner.state)
    }

    /// Get a dispatcher that can be handed to other threads or tasks
    pub fn dispatcher(&self) -> Dispatcher {
        self.inner.dispatcher.clone()
    }

    /// Call `callback` with every committed state that differs from the previous one
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(Arc<BrowserState>) + Send + 'static,
    {
        let id = self.inner.subscribers.register_with(|| {
            let callback: Callback = Box::new(callback);
            callback
        });
        Subscription::new(id, &self.inner.subscribers)
    }

    /// Call `on_change` whenever `map(state)` changes
    ///
    /// The value at registration time is the baseline, it is not reported.
    pub fn observe<T, M, F>(&self, map: M, mut on_change: F) -> Subscription
    where
        T: PartialEq + Send + 'static,
        M: Fn(&BrowserState) -> T + Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        let state = Arc::clone(&self.inner.state);
        let id = self.inner.subscribers.register_with(move || {
            let mut last = map(&read_state(&state));
            let callback: Callback = Box::new(move |snapshot: Arc<BrowserState>| {
                let value = map(&snapshot);
                if value != last {
                    on_change(&value);
                    last = value;
                }
            });
            callback
        });
        Subscription::new(id, &self.inner.subscribers)
    }

    /// Committed states as an async stream
    pub fn stream(&self) -> StateStream {
        let (tx, rx) = unbounded_channel();
        let subscription = self.subscribe(move |state| {
            // Receiver gone means the stream is being dropped
            let _ = tx.send(state);
        });
        StateStream::new(rx, subscription)
    }

    /// Process everything accepted so far, then stop the worker
    ///
    /// Actions dispatched afterwards resolve with `StoreError::Closed`. Calling
    /// this from middleware or a subscriber stops the worker without waiting
    /// for it.
    pub fn shutdown(&self) {
        self.inner.stop();
    }
}

impl StoreInner {
    fn stop(&self) {
        let Some(handle) = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        else {
            return;
        };

        self.dispatcher.shutdown();
        if handle.thread().id() == thread::current().id() {
            log::debug!("Store shut down from its own worker");
            return;
        }
        if handle.join().is_err() {
            log::error!("Store worker panicked");
        }
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        self.stop();
    }
}
