//! Context propagation for mounted components.
//!
//! Values are provided for the duration of a closure and looked up by type,
//! so a component mounted anywhere below a provider can reach the store
//! without it being threaded through every constructor.

mod provider;

pub use provider::{provide, use_context};

use crate::error::HookError;
use crate::store::{Reducer, Store};

/// Get the nearest provided [`Store`] for reducer `R`.
pub fn use_store<R: Reducer>() -> Result<Store<R>, HookError> {
    use_context::<Store<R>>()
}
