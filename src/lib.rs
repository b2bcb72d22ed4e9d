//! # Slicestore
//!
//! A single-threaded reducer store with selector subscriptions, for UI
//! component trees that should only re-render what changed.
//!
//! ## Store (state container)
//!
//! - `Store<R>` - Holds an `Rc` of the current state and replaces it through
//!   a `Reducer` on every dispatch
//! - Listeners are notified only when the reducer returned a new `Rc`
//! - The handle is cheap to clone and keeps its identity for its lifetime
//!
//! ## Hooks (consumers)
//!
//! - `Selected<R, T>` - A projection of the state that requests a re-render
//!   of its owner only when the projected value is no longer `Identical`
//! - `OnClick` / `TimerGuard` - Dispatch `CLICK` directly, or enqueue `TIME`
//!   from a periodic tokio task
//!
//! Components are mounted into a `Host` and driven by an `EventLoop`, which
//! also provides the store to hooks through [`context`].

pub mod app;
pub mod component;
pub mod config;
pub mod context;
pub mod error;
pub mod event_loop;
pub mod hooks;
pub mod store;

// Re-export main types for convenience
pub use app::{app_store, AppAction, AppReducer, AppState, AppStore};
pub use component::{Clicker, Component, ComponentRef, Host, RenderHandle, Timer};
pub use config::AppConfig;
pub use error::{ConfigError, HookError, StoreError};
pub use event_loop::{ActionSender, EventLoop};
pub use hooks::{Identical, OnClick, Selected, TimerGuard};
pub use store::{Reducer, Store, Subscription};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = app_store();
        assert_eq!(*store.get_state(), AppState { clicks: 0, time: 0 });
        store.dispatch(AppAction::Click).unwrap();
        assert_eq!(store.get_state().clicks, 1);
    }
}
