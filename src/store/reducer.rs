use std::fmt;
use std::rc::Rc;

/// Pure state transition: `(state, action) -> next state`.
///
/// The reducer is the only place where state transitions happen. When an
/// action does not change anything, it must hand back the *same* `Rc`
/// (`Rc::clone(state)`), because the store decides whether to notify by
/// pointer identity rather than by comparing contents.
///
/// # Examples
///
/// ```
/// use slicestore::Reducer;
/// use std::rc::Rc;
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = u32;
///     type Action = bool;
///
///     fn reduce(&self, state: &Rc<u32>, bump: &bool) -> Rc<u32> {
///         if *bump {
///             Rc::new(**state + 1)
///         } else {
///             Rc::clone(state)
///         }
///     }
/// }
///
/// let state = Rc::new(0);
/// assert!(Rc::ptr_eq(&state, &Counter.reduce(&state, &false)));
/// assert_eq!(*Counter.reduce(&state, &true), 1);
/// ```
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: 'static;

    /// The action type this reducer handles.
    type Action: fmt::Debug + 'static;

    /// Compute the next state.
    fn reduce(&self, state: &Rc<Self::State>, action: &Self::Action) -> Rc<Self::State>;
}
