//! Configuration System
//!
//! Layered configuration for shutils: built-in defaults, the global config file, the
//! working-directory config file, then `SHUTILS__SECTION__KEY` environment variables.

use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Settings for the concatenation command
    #[serde(default)]
    pub cat: CatConfig,

    /// Settings for directory traversal (ls, find)
    #[serde(default)]
    pub walk: WalkConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Concatenation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatConfig {
    /// Wall-clock window for reading every file, in milliseconds
    #[serde(default = "default_cat_timeout_ms")]
    pub timeout_ms: u64,
}

pub(crate) fn default_cat_timeout_ms() -> u64 {
    1000
}

impl Default for CatConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_cat_timeout_ms(),
        }
    }
}

impl CatConfig {
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Traversal settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkConfig {
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl From<&WalkConfig> for WalkerConfig {
    fn from(config: &WalkConfig) -> Self {
        WalkerConfig {
            follow_symlinks: config.follow_symlinks,
        }
    }
}

impl ToolConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cat.timeout_ms == 0 {
            return Err("cat.timeout_ms must be greater than zero".to_string());
        }
        Ok(())
    }
}
