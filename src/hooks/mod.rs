//! Hooks components use to read from and write to a store.
//!
//! - [`Selected`] / [`use_selector`]: subscribe to a projection of state
//! - [`OnClick`] / [`use_on_click`]: dispatch `CLICK`
//! - [`TimerGuard`] / [`use_timer`]: enqueue `TIME` periodically
//!
//! The `use_*` variants look their store or sender up through
//! [`context`](crate::context); the named types take it explicitly.

mod actions;
mod identity;
mod selector;
mod timer;

pub use actions::{use_on_click, OnClick};
pub use identity::Identical;
pub use selector::{use_selector, Selected};
pub use timer::{use_timer, TimerGuard};
