use super::host::Component;
use super::render::RenderHandle;
use crate::app::{AppReducer, AppState, AppStore};
use crate::context::use_store;
use crate::error::{HookError, StoreError};
use crate::hooks::{use_on_click, use_selector, use_timer, OnClick, Selected, TimerGuard};
use std::time::Duration;

/// Click counter: shows `Clicks: N` and dispatches `CLICK` on [`click`].
///
/// [`click`]: Clicker::click
pub struct Clicker {
    store: AppStore,
    clicks: Selected<AppReducer, u64>,
    on_click: OnClick,
}

impl Clicker {
    pub fn mount(render: &RenderHandle) -> Result<Self, HookError> {
        Ok(Self {
            store: use_store::<AppReducer>()?,
            clicks: use_selector::<AppReducer, _, _>(|state: &AppState| state.clicks, render)?,
            on_click: use_on_click()?,
        })
    }

    pub fn click(&self) -> Result<bool, StoreError> {
        self.on_click.call()
    }

    pub fn on_click(&self) -> OnClick {
        self.on_click.clone()
    }

    /// The store handle captured at mount.
    pub fn store(&self) -> &AppStore {
        &self.store
    }
}

impl Component for Clicker {
    const NAME: &'static str = "clicker";

    fn render(&self) -> String {
        format!("Clicks: {}", self.clicks.current())
    }
}

/// Elapsed-time display, ticking once per period while mounted.
pub struct Timer {
    time: Selected<AppReducer, u64>,
    ticker: TimerGuard,
}

impl Timer {
    pub fn mount(render: &RenderHandle, period: Duration) -> Result<Self, HookError> {
        Ok(Self {
            ticker: use_timer(period)?,
            time: use_selector::<AppReducer, _, _>(|state: &AppState| state.time, render)?,
        })
    }

    pub fn period(&self) -> Duration {
        self.ticker.period()
    }
}

impl Component for Timer {
    const NAME: &'static str = "timer";

    fn render(&self) -> String {
        format!("Time: {}", self.time.current())
    }
}
