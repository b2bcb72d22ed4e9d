//! Mounting and re-rendering of consumer components.
//!
//! The [`Host`] stands in for a UI framework: it builds components, keeps
//! them alive while mounted and renders the ones whose [`RenderHandle`]
//! was signalled. [`Clicker`] and [`Timer`] are the two bundled widgets.

mod host;
mod render;
mod widgets;

pub use host::{Component, ComponentRef, Host, MountId};
pub use render::RenderHandle;
pub use widgets::{Clicker, Timer};
