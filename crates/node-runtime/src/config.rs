//! # Runtime Configuration
//!
//! Loaded from the environment. Every field has a default, so an empty
//! environment yields a working configuration.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `QC_LOG_LEVEL` | `log_level` | `info` |
//! | `QC_MAX_MESSAGE_BYTES` | `max_message_bytes` | 16 MiB |
//! | `QC_MAX_FRAME_BYTES` | `max_frame_bytes` | 16 MiB |
//! | `QC_MAX_INPUT_BYTES` | `max_input_bytes` | 256 MiB |

use shared_types::DEFAULT_MAX_MESSAGE_BYTES;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_LOG_LEVEL: &str = "QC_LOG_LEVEL";
pub const ENV_MAX_MESSAGE_BYTES: &str = "QC_MAX_MESSAGE_BYTES";
pub const ENV_MAX_FRAME_BYTES: &str = "QC_MAX_FRAME_BYTES";
pub const ENV_MAX_INPUT_BYTES: &str = "QC_MAX_INPUT_BYTES";

/// Largest frame body accepted from the transport.
pub const DEFAULT_MAX_FRAME_BYTES: u32 = 16 * 1024 * 1024;

/// Total bytes read from the transport in one run.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 256 * 1024 * 1024;

/// Verifier runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `tracing-subscriber` filter directive, e.g. `info` or `qc_10=debug`.
    pub log_level: String,
    /// Decode limit for messages and the headers nested in them.
    pub max_message_bytes: u64,
    /// Largest frame body the reader accepts.
    pub max_frame_bytes: u32,
    /// Total input the reader accepts, frame headers included.
    pub max_input_bytes: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl RuntimeConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(value) = lookup(ENV_MAX_MESSAGE_BYTES) {
            config.max_message_bytes = parse_number(ENV_MAX_MESSAGE_BYTES, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_FRAME_BYTES) {
            config.max_frame_bytes = parse_number(ENV_MAX_FRAME_BYTES, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_INPUT_BYTES) {
            config.max_input_bytes = parse_number(ENV_MAX_INPUT_BYTES, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would refuse every message.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }
        if self.max_message_bytes == 0 {
            return Err(ConfigError::ZeroLimit {
                var: ENV_MAX_MESSAGE_BYTES,
            });
        }
        if self.max_frame_bytes == 0 {
            return Err(ConfigError::ZeroLimit {
                var: ENV_MAX_FRAME_BYTES,
            });
        }
        if self.max_input_bytes == 0 {
            return Err(ConfigError::ZeroLimit {
                var: ENV_MAX_INPUT_BYTES,
            });
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    ZeroLimit { var: &'static str },

    #[error("QC_LOG_LEVEL must not be empty")]
    EmptyLogLevel,
}
