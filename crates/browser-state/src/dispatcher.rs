//! Dispatcher
//!
//! Every action enters the store through a [`Dispatcher`]: it is the sending
//! half of the single queue the store worker drains in FIFO order. It is cheap
//! to clone and can be moved into background tasks that need to report back
//! into the store.
//!
//! Each dispatch returns a [`DispatchHandle`] that resolves once the action
//! (and every follow-up action its middleware dispatched through the context)
//! has been reduced and delivered to subscribers.

use std::future::Future;
use std::pin::Pin;
use std::sync::mpsc::Sender;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::actions::Action;
use crate::error::StoreError;

/// Message consumed by the store worker
pub(crate) enum Envelope {
    Dispatch {
        action: Action,
        done: oneshot::Sender<()>,
    },
    Shutdown,
}

/// Dispatcher for sending actions into the store
#[derive(Clone)]
pub struct Dispatcher {
    tx: Sender<Envelope>,
}

impl Dispatcher {
    pub(crate) fn new(tx: Sender<Envelope>) -> Self {
        Self { tx }
    }

    /// Queue an action for processing
    ///
    /// Never blocks. If the store is already closed the action is logged and
    /// the returned handle resolves with [`StoreError::Closed`].
    pub fn dispatch(&self, action: impl Into<Action>) -> DispatchHandle {
        let (done, rx) = oneshot::channel();
        let envelope = Envelope::Dispatch {
            action: action.into(),
            done,
        };

        if let Err(err) = self.tx.send(envelope) {
            if let Envelope::Dispatch { action, .. } = err.0 {
                log::error!("Dispatcher: store closed, dropping {:?}", action);
            }
        }
        DispatchHandle { rx }
    }

    /// Ask the worker to stop after everything queued before this call
    pub(crate) fn shutdown(&self) {
        if self.tx.send(Envelope::Shutdown).is_err() {
            log::debug!("Dispatcher: store worker already stopped");
        }
    }
}

/// Completion handle of a dispatched action
///
/// Dropping it is fine (fire-and-forget). It can be awaited, or joined from
/// synchronous code.
#[derive(Debug)]
pub struct DispatchHandle {
    rx: oneshot::Receiver<()>,
}

impl DispatchHandle {
    /// Block the current thread until the action has been processed
    ///
    /// Must not be called from inside an async runtime or from the store's
    /// own middleware/subscribers (await the handle, or don't wait at all).
    pub fn join(self) -> Result<(), StoreError> {
        self.rx.blocking_recv().map_err(|_| StoreError::Closed)
    }
}

impl Future for DispatchHandle {
    type Output = Result<(), StoreError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.map_err(|_| StoreError::Closed))
    }
}
