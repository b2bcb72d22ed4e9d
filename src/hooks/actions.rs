use crate::app::{AppAction, AppReducer, AppStore};
use crate::context::use_store;
use crate::error::{HookError, StoreError};

/// Click handler bound to an [`AppStore`].
#[derive(Clone)]
pub struct OnClick {
    store: AppStore,
}

impl OnClick {
    pub fn new(store: &AppStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    /// Dispatch one `CLICK`.
    pub fn call(&self) -> Result<bool, StoreError> {
        self.store.dispatch(AppAction::Click)
    }
}

/// Click handler for the nearest provided [`AppStore`].
pub fn use_on_click() -> Result<OnClick, HookError> {
    let store = use_store::<AppReducer>()?;
    Ok(OnClick::new(&store))
}
