//! Merge rules: defaults, override order, conflict handling.

use crate::config::default_cat_timeout_ms;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("cat.timeout_ms", default_cat_timeout_ms())?
        .set_default("walk.follow_symlinks", false)
}
