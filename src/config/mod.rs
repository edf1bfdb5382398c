//! # Config Module
//!
//! Service configuration, merged from three layers (lowest precedence first):
//!
//! 1. Built-in defaults ([`ServiceConfig::default`]): listen on `0.0.0.0:8080`,
//!    ids start at `0`, no seed user.
//! 2. An optional YAML file ([`ServiceConfig::from_file`]).
//! 3. Command-line flags and their environment variables, applied by the CLI
//!    through [`ConfigOverrides`].
//!
//! ## File Format
//!
//! ```yaml
//! http:
//!   addr: "127.0.0.1:9000"
//! store:
//!   first_id: 1
//!   seed_admin:
//!     username: admin
//!     password: admin
//!     email: admin@example.com
//! ```
//!
//! Every key is optional; missing sections keep their defaults.

use crate::model::UserId;
use crate::store::StoreConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

pub const DEFAULT_PORT: u16 = 8080;

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub addr: SocketAddr,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub http: HttpConfig,
    pub store: StoreConfig,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub addr: Option<SocketAddr>,
    /// Replaces only the port of whichever address wins.
    pub port: Option<u16>,
    pub first_id: Option<UserId>,
}

impl ServiceConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("invalid service config")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Defaults, then `path` when given, then `overrides`.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        Ok(config)
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(addr) = overrides.addr {
            self.http.addr = addr;
        }
        if let Some(port) = overrides.port {
            self.http.addr.set_port(port);
        }
        if let Some(first_id) = overrides.first_id {
            self.store.first_id = first_id;
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to render config")
    }
}
