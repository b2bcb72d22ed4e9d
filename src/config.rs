//! Application configuration.
//!
//! Every field has a default, so an empty document is a valid config.
//!
//! ```toml
//! log_filter = "slicestore=debug"
//!
//! [timer]
//! period_ms = 1000
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default timer period (one tick per second).
pub const DEFAULT_TIMER_PERIOD_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timer: TimerConfig,
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub period_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_TIMER_PERIOD_MS,
        }
    }
}

impl TimerConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.period_ms == 0 {
            return Err(ConfigError::Validation {
                message: "timer.period_ms must be greater than zero".to_string(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "log_filter must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timer.period(), Duration::from_secs(1));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[timer]\nperiod_ms = 250\n").unwrap();
        assert_eq!(config.timer.period(), Duration::from_millis(250));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn zero_period_fails_validation() {
        let err = AppConfig::from_toml_str("[timer]\nperiod_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[timer\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = Path::new("/nonexistent/slicestore/config.toml");
        assert_eq!(AppConfig::load_from(path).unwrap(), AppConfig::default());
    }
}
