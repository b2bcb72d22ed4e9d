use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A zero-argument change notification callback.
pub type Listener = Rc<dyn Fn()>;

/// Identity of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListenerId(u64);

#[derive(Default)]
struct RegistryInner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
}

/// Insertion-ordered set of listeners.
///
/// Notification walks a snapshot of the list, so listeners may subscribe
/// or unsubscribe (themselves or others) while a round is in progress.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Rc<RegistryInner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener. The returned [`Subscription`] removes it again.
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, listener));
        tracing::trace!(listener = id.0, "listener subscribed");

        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
            active: Cell::new(true),
        }
    }

    /// Invoke every registered listener once, in registration order.
    pub fn notify_all(&self) {
        // Clone out so no borrow is held while user callbacks run.
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        tracing::debug!(listeners = snapshot.len(), "notification round");
        for listener in snapshot {
            listener();
        }
    }

    /// Number of currently registered listeners.
    pub fn len(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// RAII handle for a registered listener.
///
/// Dropping the handle unsubscribes. [`Subscription::unsubscribe`] does the
/// same eagerly and may be called any number of times.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RegistryInner>,
    active: Cell<bool>,
}

impl Subscription {
    /// Whether this subscription still has a listener registered.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Remove the listener. Later calls are no-ops.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            let removed = {
                let mut listeners = registry.listeners.borrow_mut();
                listeners
                    .iter()
                    .position(|(id, _)| *id == self.id)
                    .map(|index| listeners.remove(index))
            };
            // Dropped outside the borrow: the listener may own other subscriptions.
            drop(removed);
            tracing::trace!(listener = self.id.0, "listener unsubscribed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Listener {
        let log = Rc::clone(log);
        Rc::new(move || log.borrow_mut().push(name))
    }

    #[test]
    fn notifies_in_registration_order() {
        let registry = Registry::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let _a = registry.subscribe(recorder(&log, "a"));
        let _b = registry.subscribe(recorder(&log, "b"));
        let _c = registry.subscribe(recorder(&log, "c"));

        registry.notify_all();
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_is_idempotent_and_targets_one_listener() {
        let registry = Registry::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let a = registry.subscribe(recorder(&log, "a"));
        let _b = registry.subscribe(recorder(&log, "b"));

        a.unsubscribe();
        a.unsubscribe();
        assert!(!a.is_active());
        assert_eq!(registry.len(), 1);

        registry.notify_all();
        assert_eq!(*log.borrow(), vec!["b"]);
    }

    #[test]
    fn same_callback_registered_twice_is_removed_once() {
        let registry = Registry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let listener = recorder(&log, "x");

        let first = registry.subscribe(Rc::clone(&listener));
        let _second = registry.subscribe(listener);
        first.unsubscribe();

        registry.notify_all();
        assert_eq!(*log.borrow(), vec!["x"]);
    }

    #[test]
    fn drop_unsubscribes() {
        let registry = Registry::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        {
            let _sub = registry.subscribe(recorder(&log, "scoped"));
            assert_eq!(registry.len(), 1);
        }

        assert!(registry.is_empty());
        registry.notify_all();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_during_round_keeps_snapshot() {
        let registry = Registry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let killer = {
            let victim = Rc::clone(&victim);
            let log = Rc::clone(&log);
            registry.subscribe(Rc::new(move || {
                log.borrow_mut().push("killer");
                if let Some(sub) = victim.borrow().as_ref() {
                    sub.unsubscribe();
                }
            }))
        };
        *victim.borrow_mut() = Some(registry.subscribe(recorder(&log, "victim")));

        // The in-flight round still reaches the victim.
        registry.notify_all();
        assert_eq!(*log.borrow(), vec!["killer", "victim"]);

        log.borrow_mut().clear();
        registry.notify_all();
        assert_eq!(*log.borrow(), vec!["killer"]);
        drop(killer);
    }

    #[test]
    fn subscribe_during_round_joins_next_round() {
        let registry = Registry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let late: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let _spawner = {
            let handle = registry.clone();
            let late = Rc::clone(&late);
            let log = Rc::clone(&log);
            registry.subscribe(Rc::new(move || {
                if late.borrow().is_empty() {
                    let sub = handle.subscribe(recorder(&log, "late"));
                    late.borrow_mut().push(sub);
                }
            }))
        };

        registry.notify_all();
        assert!(log.borrow().is_empty());

        registry.notify_all();
        assert_eq!(*log.borrow(), vec!["late"]);
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let registry = Registry::new();
        let sub = registry.subscribe(Rc::new(|| {}));
        drop(registry);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }
}
