use std::rc::Rc;

use super::action::AppAction;
use super::state::AppState;
use crate::store::Reducer;

/// Reducer for the click counter and elapsed-time ticker.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(&self, state: &Rc<AppState>, action: &AppAction) -> Rc<AppState> {
        match action {
            AppAction::Click => Rc::new(AppState {
                clicks: state.clicks + 1,
                ..**state
            }),
            AppAction::Time => Rc::new(AppState {
                time: state.time + 1,
                ..**state
            }),
            AppAction::Other(tag) => {
                tracing::trace!(%tag, "ignoring unrecognized action");
                Rc::clone(state)
            }
        }
    }
}
