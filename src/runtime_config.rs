//! # Runtime Configuration Module
//!
//! Environment-driven tuning of the `may` coroutine runtime.
//!
//! ## `USERS_STACK_SIZE`
//!
//! Stack size for the coroutine serving each connection. Accepts decimal
//! (`16384`) or hexadecimal (`0x4000`). Default `0x4000` (16 KB).
//!
//! ```rust
//! use users_api::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! assert!(config.stack_size > 0);
//! ```

use std::env;

pub const STACK_SIZE_ENV: &str = "USERS_STACK_SIZE";
pub const DEFAULT_STACK_SIZE: usize = 0x4000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes
    pub stack_size: usize,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var(STACK_SIZE_ENV).ok().as_deref())
    }

    /// Parse a raw `USERS_STACK_SIZE` value. Unparseable or zero falls back to the default.
    pub fn from_value(value: Option<&str>) -> Self {
        let parsed = value.and_then(|val| {
            let val = val.trim();
            match val.strip_prefix("0x").or_else(|| val.strip_prefix("0X")) {
                Some(hex) => usize::from_str_radix(hex, 16).ok(),
                None => val.parse().ok(),
            }
        });
        RuntimeConfig {
            stack_size: parsed.filter(|&s| s > 0).unwrap_or(DEFAULT_STACK_SIZE),
        }
    }

    /// Push these settings into the global `may` config.
    pub fn apply(&self) {
        may::config().set_stack_size(self.stack_size);
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}
