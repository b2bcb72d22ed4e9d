use super::identity::Identical;
use crate::component::RenderHandle;
use crate::context::use_store;
use crate::error::HookError;
use crate::store::{Reducer, Store, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

type SelectorFn<S, T> = Rc<dyn Fn(&S) -> T>;

struct SelectorSlot<S, T> {
    selector: RefCell<SelectorFn<S, T>>,
    last: RefCell<T>,
}

impl<S, T> SelectorSlot<S, T> {
    fn select(&self, state: &S) -> T {
        // Clone the selector out so it may be replaced while it runs.
        let selector = Rc::clone(&self.selector.borrow());
        selector(state)
    }
}

/// A live projection of store state owned by one component.
///
/// On creation the selector runs once against the current state. After
/// that a store listener re-runs it on every notification round and
/// requests a re-render of the owner only when the result is not
/// [`Identical`] to the last value observed. Dropping the `Selected`
/// removes the listener.
///
/// # Examples
///
/// ```
/// use slicestore::{app_store, AppAction, AppState, RenderHandle, Selected};
///
/// let store = app_store();
/// let render = RenderHandle::new("counter");
/// let clicks = Selected::new(&store, |s: &AppState| s.clicks, &render);
///
/// store.dispatch(AppAction::Time).unwrap();
/// assert!(!render.is_dirty());
///
/// store.dispatch(AppAction::Click).unwrap();
/// assert!(render.is_dirty());
/// assert_eq!(clicks.current(), 1);
/// ```
pub struct Selected<R: Reducer, T> {
    store: Store<R>,
    slot: Rc<SelectorSlot<R::State, T>>,
    subscription: Subscription,
}

impl<R, T> Selected<R, T>
where
    R: Reducer,
    T: Identical + Clone + 'static,
{
    /// Subscribe `selector` to `store`, signalling `render` on change.
    pub fn new<F>(store: &Store<R>, selector: F, render: &RenderHandle) -> Self
    where
        F: Fn(&R::State) -> T + 'static,
    {
        let initial = selector(&store.get_state());
        let selector: SelectorFn<R::State, T> = Rc::new(selector);
        let slot = Rc::new(SelectorSlot {
            selector: RefCell::new(selector),
            last: RefCell::new(initial),
        });

        let listener = {
            // Weak: the store's registry owns this closure.
            let store = store.downgrade();
            let slot = Rc::clone(&slot);
            let render = render.clone();
            move || {
                let Some(store) = store.upgrade() else {
                    return;
                };
                let next = slot.select(&store.get_state());
                if next.identical(&slot.last.borrow()) {
                    return;
                }
                *slot.last.borrow_mut() = next;
                render.request();
            }
        };

        Self {
            store: store.clone(),
            slot,
            subscription: store.subscribe(listener),
        }
    }

    /// Re-evaluate against the latest state and return the result.
    ///
    /// Also records the result as the last observed value, so a
    /// notification that arrives afterwards for the same state does not
    /// request another render.
    pub fn current(&self) -> T {
        let value = self.slot.select(&self.store.get_state());
        *self.slot.last.borrow_mut() = value.clone();
        value
    }

    /// The value recorded by the last evaluation, without re-running.
    pub fn last_observed(&self) -> T {
        self.slot.last.borrow().clone()
    }

    /// Swap the projection used from the next evaluation on.
    pub fn set_selector<F>(&self, selector: F)
    where
        F: Fn(&R::State) -> T + 'static,
    {
        let selector: SelectorFn<R::State, T> = Rc::new(selector);
        *self.slot.selector.borrow_mut() = selector;
    }

    /// Stop listening. Dropping does the same; repeated calls are no-ops.
    pub fn unsubscribe(&self) {
        self.subscription.unsubscribe();
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }
}

/// [`Selected::new`] against the nearest provided store.
pub fn use_selector<R, T, F>(
    selector: F,
    render: &RenderHandle,
) -> Result<Selected<R, T>, HookError>
where
    R: Reducer,
    T: Identical + Clone + 'static,
    F: Fn(&R::State) -> T + 'static,
{
    let store = use_store::<R>()?;
    Ok(Selected::new(&store, selector, render))
}
