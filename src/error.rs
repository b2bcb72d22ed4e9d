//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`Store`](crate::Store) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `dispatch` was called while the reducer was still running.
    #[error("dispatch called from inside the reducer")]
    ReentrantDispatch,
}

/// Errors raised while activating hooks.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("no `{type_name}` has been provided to this part of the tree")]
    MissingContext { type_name: &'static str },

    #[error("timer period must be greater than zero")]
    ZeroPeriod,

    #[error("timer requires a running tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}
