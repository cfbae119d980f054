//! Configuration record and the `info` formatter
//!
//! The record can be built in code or loaded from a TOML file:
//!
//! ```toml
//! name = "bridge"
//! version = "0.1.0"
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default config name
pub const DEFAULT_NAME: &str = "bridge";

/// Default config version
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Name and version of a bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Display name
    #[serde(default = "default_name")]
    pub name: String,
    /// Free-form version string
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

impl BridgeConfig {
    /// Create a config record
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse a config record from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config record from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize the record as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Shorthand for [`info`]
    #[must_use]
    pub fn info(&self) -> String {
        info(self)
    }
}

/// Format a config as `"<name> v<version>"`
///
/// ```
/// use bridge::{info, BridgeConfig};
///
/// assert_eq!(info(&BridgeConfig::new("test", "1.0.0")), "test v1.0.0");
/// ```
#[must_use]
pub fn info(config: &BridgeConfig) -> String {
    format!("{} v{}", config.name, config.version)
}
