//! The counter/timer application: state, actions and reducer.

mod action;
mod reducer;
mod state;

pub use action::AppAction;
pub use reducer::AppReducer;
pub use state::AppState;

use crate::store::Store;

/// Store type used by the bundled widgets.
pub type AppStore = Store<AppReducer>;

/// A fresh store starting at `{ clicks: 0, time: 0 }`.
pub fn app_store() -> AppStore {
    Store::new(AppReducer, AppState::new())
}
