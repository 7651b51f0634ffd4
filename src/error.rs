//! Error types for the shutils command-line tool.

use crate::command::CommandName;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating arguments or running a command
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("not found args")]
    MissingCommand,

    #[error("invalid command: {0}")]
    UnknownCommand(String),

    #[error("invalid params length for {command}")]
    InvalidArity { command: CommandName },

    #[error("not found file or directory: {0}")]
    NotFound(String),

    #[error("open {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("failed to walk directory: {0}")]
    Walk(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to create runtime: {0}")]
    Runtime(String),
}

impl From<config::ConfigError> for ToolError {
    fn from(err: config::ConfigError) -> Self {
        ToolError::Config(err.to_string())
    }
}

impl From<walkdir::Error> for ToolError {
    fn from(err: walkdir::Error) -> Self {
        ToolError::Walk(err.to_string())
    }
}
