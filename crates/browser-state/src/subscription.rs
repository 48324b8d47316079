//! Subscriber registry
//!
//! Subscribers are invoked on the store worker, after a state change has been
//! committed, in registration order. Once [`Subscription`] is dropped (or
//! [`Subscription::unsubscribe`] returns) the callback is never invoked again.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};
use std::thread::{self, ThreadId};

use tokio::sync::mpsc::UnboundedReceiver;

use crate::state::BrowserState;

pub(crate) type Callback = Box<dyn FnMut(Arc<BrowserState>) + Send>;

struct Subscriber {
    active: AtomicBool,
    callback: Mutex<Callback>,
}

#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    next_id: AtomicU64,
    subscribers: Mutex<BTreeMap<u64, Arc<Subscriber>>>,
    worker: OnceLock<ThreadId>,
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SubscriberRegistry {
    /// Remember the thread notifications run on
    pub(crate) fn set_worker(&self, id: ThreadId) {
        let _ = self.worker.set(id);
    }

    fn on_worker(&self) -> bool {
        self.worker.get() == Some(&thread::current().id())
    }

    /// Register the callback built by `make`
    ///
    /// `make` runs while the registry is locked, so no notification can slip
    /// in between building the callback and registering it.
    pub(crate) fn register_with(&self, make: impl FnOnce() -> Callback) -> u64 {
        let mut subscribers = lock(&self.subscribers);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        subscribers.insert(
            id,
            Arc::new(Subscriber {
                active: AtomicBool::new(true),
                callback: Mutex::new(make()),
            }),
        );
        id
    }

    pub(crate) fn unsubscribe(&self, id: u64) {
        let Some(subscriber) = lock(&self.subscribers).remove(&id) else {
            return;
        };
        subscriber.active.store(false, Ordering::SeqCst);

        // Wait for an in-flight invocation, unless we are that invocation
        if !self.on_worker() {
            drop(lock(&subscriber.callback));
        }
    }

    pub(crate) fn notify(&self, state: &Arc<BrowserState>) {
        let snapshot: Vec<(u64, Arc<Subscriber>)> = lock(&self.subscribers)
            .iter()
            .map(|(id, subscriber)| (*id, Arc::clone(subscriber)))
            .collect();

        for (id, subscriber) in snapshot {
            let mut callback = lock(&subscriber.callback);
            if !subscriber.active.load(Ordering::SeqCst) {
                continue;
            }
            let state = Arc::clone(state);
            if panic::catch_unwind(AssertUnwindSafe(|| (*callback)(state))).is_err() {
                log::error!("Subscriber {} panicked, removing it", id);
                subscriber.active.store(false, Ordering::SeqCst);
                lock(&self.subscribers).remove(&id);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        lock(&self.subscribers).len()
    }
}

/// Registration handle returned by `Store::subscribe` and friends
///
/// Unsubscribes when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<SubscriberRegistry>,
}

impl Subscription {
    pub(crate) fn new(id: u64, registry: &Arc<SubscriberRegistry>) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
        }
    }

    /// Stop receiving notifications
    ///
    /// When called off the store worker, this waits for a running invocation of
    /// the callback to return.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unsubscribe(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Async stream of committed states, see `Store::stream`
pub struct StateStream {
    rx: UnboundedReceiver<Arc<BrowserState>>,
    _subscription: Subscription,
}

impl StateStream {
    pub(crate) fn new(rx: UnboundedReceiver<Arc<BrowserState>>, subscription: Subscription) -> Self {
        Self {
            rx,
            _subscription: subscription,
        }
    }

    /// Next committed state, `None` once the store is gone
    pub async fn recv(&mut self) -> Option<Arc<BrowserState>> {
        self.rx.recv().await
    }

    /// Next already-committed state, without waiting
    pub fn try_recv(&mut self) -> Option<Arc<BrowserState>> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(registry: &Arc<SubscriberRegistry>) -> (Subscription, Arc<AtomicU64>) {
        let calls = Arc::new(AtomicU64::new(0));
        let counted = Arc::clone(&calls);
        let id = registry.register_with(move || {
            let callback: Callback = Box::new(move |_state: Arc<BrowserState>| {
                counted.fetch_add(1, Ordering::SeqCst);
            });
            callback
        });
        (Subscription::new(id, registry), calls)
    }

    #[test]
    fn test_notify_reaches_every_subscriber() {
        let registry = Arc::new(SubscriberRegistry::default());
        let (_a, a_calls) = counter(&registry);
        let (_b, b_calls) = counter(&registry);

        registry.notify(&Arc::new(BrowserState::default()));

        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_subscription_is_not_notified() {
        let registry = Arc::new(SubscriberRegistry::default());
        let (subscription, calls) = counter(&registry);
        drop(subscription);

        registry.notify(&Arc::new(BrowserState::default()));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_panicking_subscriber_is_removed() {
        let registry = Arc::new(SubscriberRegistry::default());
        let id = registry.register_with(|| {
            let callback: Callback = Box::new(|_state: Arc<BrowserState>| panic!("boom"));
            callback
        });
        let _subscription = Subscription::new(id, &registry);
        let (_other, calls) = counter(&registry);

        registry.notify(&Arc::new(BrowserState::default()));
        registry.notify(&Arc::new(BrowserState::default()));

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(registry.len(), 1);
    }
}
