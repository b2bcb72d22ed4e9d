//! Reducer-driven state container.
//!
//! A [`Store`] owns one state value behind an `Rc`, replaces it through a
//! [`Reducer`] on every dispatch and notifies its [`Registry`] of listeners
//! whenever the reducer produced a new value.

mod reducer;
mod registry;
mod store;

pub use reducer::Reducer;
pub use registry::{Listener, Registry, Subscription};
pub use store::{Store, WeakStore};
