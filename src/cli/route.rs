//! CLI route: single route table and run context. Dispatches to command handlers.

use crate::aggregate::Aggregator;
use crate::command::{CommandContext, CommandParams};
use crate::commands;
use crate::config::ToolConfig;
use crate::error::ToolError;
use crate::tree::walker::{Walker, WalkerConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: working directory and the collaborators the
/// handlers need, built once from configuration.
pub struct RunContext {
    root: PathBuf,
    walker_config: WalkerConfig,
    aggregator: Aggregator,
}

impl RunContext {
    /// Create run context for `root` from loaded configuration.
    pub fn new(root: PathBuf, config: &ToolConfig) -> Self {
        Self {
            root,
            walker_config: WalkerConfig::from(&config.walk),
            aggregator: Aggregator::filesystem(config.cat.deadline()),
        }
    }

    /// Replace the aggregator (custom readers or deadlines).
    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Execute a validated command via the single route table. Returns the stdout bytes.
    pub fn execute(&self, command: &CommandContext) -> Result<Vec<u8>, ToolError> {
        let started = Instant::now();
        info!(command = %command.name(), "Executing command");
        let result = self.execute_inner(command);
        debug!(
            command = %command.name(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &CommandContext) -> Result<Vec<u8>, ToolError> {
        match command.params() {
            CommandParams::Echo { text } => Ok(commands::echo(text)),
            CommandParams::Cat { paths } => {
                let paths: Vec<PathBuf> = paths.iter().map(|p| self.resolve(p)).collect();
                commands::cat(&self.aggregator, &paths)
            }
            CommandParams::Ls => commands::ls(&self.walker()),
            CommandParams::Find { name } => commands::find(&self.walker(), name),
            CommandParams::Grep { pattern, path } => {
                commands::grep(pattern, &self.resolve(path))
            }
        }
    }

    /// Paths stay as typed when running in the process working directory.
    fn resolve(&self, path: &Path) -> PathBuf {
        if self.root == Path::new(".") {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn walker(&self) -> Walker {
        Walker::with_config(self.root.clone(), self.walker_config.clone())
    }
}
