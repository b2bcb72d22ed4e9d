//! Single-threaded UI event loop.
//!
//! The loop owns the store, the host of mounted components and the
//! receiving end of an action queue. Anything off the UI thread (the
//! timer) talks to the store only by sending actions into that queue.

use crate::component::{Component, ComponentRef, Host, RenderHandle};
use crate::context::provide;
use crate::error::{HookError, StoreError};
use crate::store::{Reducer, Store};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::SendError, UnboundedReceiver, UnboundedSender};

/// Cloneable, `Send` handle for enqueueing actions onto an [`EventLoop`].
pub struct ActionSender<A> {
    tx: UnboundedSender<A>,
}

impl<A> ActionSender<A> {
    pub fn new(tx: UnboundedSender<A>) -> Self {
        Self { tx }
    }

    /// Enqueue an action. Fails once the event loop has been dropped.
    pub fn send(&self, action: A) -> Result<(), SendError<A>> {
        self.tx.send(action)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<A> Clone for ActionSender<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Drives a [`Store`] and the components mounted against it.
pub struct EventLoop<R: Reducer> {
    store: Store<R>,
    host: Host,
    tx: UnboundedSender<R::Action>,
    rx: UnboundedReceiver<R::Action>,
}

impl<R: Reducer> EventLoop<R> {
    pub fn new(store: Store<R>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store,
            host: Host::new(),
            tx,
            rx,
        }
    }

    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn sender(&self) -> ActionSender<R::Action> {
        ActionSender::new(self.tx.clone())
    }

    /// Run `f` with the store and action sender provided as context.
    pub fn with_context<T>(&self, f: impl FnOnce() -> T) -> T {
        provide(self.store.clone(), || provide(self.sender(), f))
    }

    /// Mount a component with the store and sender in context.
    pub fn mount<C, F>(&mut self, build: F) -> Result<ComponentRef<C>, HookError>
    where
        C: Component,
        F: FnOnce(&RenderHandle) -> Result<C, HookError>,
    {
        let store = self.store.clone();
        let sender = self.sender();
        let host = &mut self.host;
        provide(store, || provide(sender, || host.mount(build)))
    }

    pub fn unmount_all(&mut self) {
        self.host.unmount_all();
    }

    /// Dispatch synchronously and flush the components it dirtied.
    pub fn dispatch(&self, action: R::Action) -> Result<bool, StoreError> {
        let changed = self.store.dispatch(action)?;
        self.host.flush();
        Ok(changed)
    }

    /// Re-render components dirtied by dispatches made outside the loop.
    pub fn flush(&self) -> usize {
        self.host.flush()
    }

    /// Dispatch everything already queued, without waiting.
    ///
    /// Returns the number of actions handled.
    pub fn run_until_idle(&mut self) -> Result<usize, StoreError> {
        let mut handled = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Receive and dispatch queued actions for `duration`.
    ///
    /// Returns the number of actions handled.
    pub async fn run_for(&mut self, duration: Duration) -> Result<usize, StoreError> {
        let deadline = tokio::time::sleep(duration);
        tokio::pin!(deadline);

        let mut handled = 0;
        loop {
            tokio::select! {
                _ = &mut deadline => break,
                Some(action) = self.rx.recv() => {
                    self.dispatch(action)?;
                    handled += 1;
                }
            }
        }
        tracing::debug!(handled, ?duration, "event loop pass finished");
        Ok(handled)
    }
}
