//! Config facade: the single entry point for loading [`ToolConfig`].

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::ToolConfig;
use crate::error::ToolError;
use config::File;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a working directory.
    /// Precedence: defaults < global file < workspace file < environment.
    pub fn load(workspace_root: &Path) -> Result<ToolConfig, ToolError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        Self::finish(builder.build()?)
    }

    /// Load configuration from one explicit file. Discovery of other files is skipped.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, ToolError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        Self::finish(builder.build()?)
    }

    fn finish(raw: config::Config) -> Result<ToolConfig, ToolError> {
        let config: ToolConfig = raw.try_deserialize()?;
        config.validate().map_err(ToolError::Config)?;
        debug!(
            cat_timeout_ms = config.cat.timeout_ms,
            follow_symlinks = config.walk.follow_symlinks,
            "Configuration loaded"
        );
        Ok(config)
    }
}
