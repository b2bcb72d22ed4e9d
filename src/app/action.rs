use std::fmt;

/// Intents understood by [`AppReducer`](super::AppReducer).
///
/// Tags other than `CLICK` and `TIME` are kept as [`AppAction::Other`] so
/// they can still be dispatched; the reducer ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Click,
    Time,
    Other(String),
}

impl AppAction {
    pub const CLICK: &'static str = "CLICK";
    pub const TIME: &'static str = "TIME";

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::CLICK => Self::Click,
            Self::TIME => Self::Time,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Click => Self::CLICK,
            Self::Time => Self::TIME,
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for AppAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
