use super::reducer::Reducer;
use super::registry::{Listener, Registry, Subscription};
use crate::error::StoreError;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

struct StoreInner<R: Reducer> {
    reducer: R,
    state: RefCell<Rc<R::State>>,
    registry: Registry,
    reducing: Cell<bool>,
    notifying: Cell<bool>,
    // Actions dispatched by listeners, applied once the current round ends.
    pending: RefCell<VecDeque<R::Action>>,
}

/// A single-threaded store driven by a [`Reducer`].
///
/// `Store` is the facade consumers hold: it exposes [`dispatch`],
/// [`subscribe`] and [`get_state`] and nothing else. Cloning is cheap and
/// every clone is the same store, so a handle captured at mount time stays
/// equal (see [`Store::ptr_eq`]) for the whole lifetime of the store.
///
/// [`dispatch`]: Store::dispatch
/// [`subscribe`]: Store::subscribe
/// [`get_state`]: Store::get_state
pub struct Store<R: Reducer> {
    inner: Rc<StoreInner<R>>,
}

impl<R: Reducer> Store<R> {
    /// Create a new store with the given reducer and initial state.
    pub fn new(reducer: R, initial: R::State) -> Self {
        Self::from_rc(reducer, Rc::new(initial))
    }

    /// Create a store that starts from an already shared state value.
    pub fn from_rc(reducer: R, initial: Rc<R::State>) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                reducer,
                state: RefCell::new(initial),
                registry: Registry::new(),
                reducing: Cell::new(false),
                notifying: Cell::new(false),
                pending: RefCell::new(VecDeque::new()),
            }),
        }
    }

    /// The latest committed state.
    pub fn get_state(&self) -> Rc<R::State> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Run the reducer and commit its result.
    ///
    /// Listeners are notified only when the reducer returned a different
    /// `Rc` than the one it was given. Returns whether the state changed.
    ///
    /// A dispatch made by a listener is queued and applied after the current
    /// notification round, so every listener in a round sees the same state.
    /// Queued dispatches return `Ok(false)`; each one later gets its own
    /// reduce and its own round.
    pub fn dispatch(&self, action: R::Action) -> Result<bool, StoreError> {
        if self.inner.reducing.get() {
            return Err(StoreError::ReentrantDispatch);
        }
        if self.inner.notifying.get() {
            tracing::trace!(?action, "dispatch queued until the round ends");
            self.inner.pending.borrow_mut().push_back(action);
            return Ok(false);
        }

        let changed = self.apply(action);
        // The queue borrow must end before `apply`, whose listeners may push.
        loop {
            let queued = self.inner.pending.borrow_mut().pop_front();
            match queued {
                Some(action) => {
                    self.apply(action);
                }
                None => break,
            }
        }
        Ok(changed)
    }

    fn apply(&self, action: R::Action) -> bool {
        let current = self.get_state();
        let next = {
            let _guard = FlagGuard::enter(&self.inner.reducing);
            self.inner.reducer.reduce(&current, &action)
        };

        if Rc::ptr_eq(&current, &next) {
            tracing::trace!(?action, "dispatch left state unchanged");
            return false;
        }

        *self.inner.state.borrow_mut() = next;
        tracing::trace!(?action, "dispatch committed new state");
        let _guard = FlagGuard::enter(&self.inner.notifying);
        self.inner.registry.notify_all();
        true
    }

    /// Register a change listener.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.subscribe_rc(Rc::new(listener))
    }

    /// Register an already shared listener.
    pub fn subscribe_rc(&self, listener: Listener) -> Subscription {
        self.inner.registry.subscribe(listener)
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.registry.len()
    }

    /// Whether two handles refer to the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// A non-owning handle, used by listeners the store itself keeps alive.
    pub fn downgrade(&self) -> WeakStore<R> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Weak counterpart of [`Store`].
pub struct WeakStore<R: Reducer> {
    inner: Weak<StoreInner<R>>,
}

impl<R: Reducer> WeakStore<R> {
    pub fn upgrade(&self) -> Option<Store<R>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<R: Reducer> Clone for WeakStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

struct FlagGuard<'a>(&'a Cell<bool>);

impl<'a> FlagGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
