/// Application state shared by the counter and timer widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppState {
    pub clicks: u64,
    pub time: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
