//! Command model: the five command names and their typed parameter payloads.
//!
//! A [`CommandContext`] can only be produced by the argument validator in
//! [`crate::cli::validate`], so a handler receiving one never re-checks arity.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Names of the supported commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Echo,
    Cat,
    Ls,
    Find,
    Grep,
}

impl CommandName {
    pub const ALL: [CommandName; 5] = [
        CommandName::Echo,
        CommandName::Cat,
        CommandName::Ls,
        CommandName::Find,
        CommandName::Grep,
    ];

    /// The word that selects this command on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Echo => "echo",
            CommandName::Cat => "cat",
            CommandName::Ls => "ls",
            CommandName::Find => "find",
            CommandName::Grep => "grep",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = ();

    /// Exact, case-sensitive match against the command words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or(())
    }
}

/// Parameters for a command, one variant per command name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParams {
    /// Trailing words joined by single spaces
    Echo { text: String },
    /// Paths to concatenate, request order preserved
    Cat { paths: Vec<PathBuf> },
    Ls,
    /// Path or name to locate under the working directory
    Find { name: String },
    /// Literal substring and the file to scan
    Grep { pattern: String, path: PathBuf },
}

impl CommandParams {
    pub fn name(&self) -> CommandName {
        match self {
            CommandParams::Echo { .. } => CommandName::Echo,
            CommandParams::Cat { .. } => CommandName::Cat,
            CommandParams::Ls => CommandName::Ls,
            CommandParams::Find { .. } => CommandName::Find,
            CommandParams::Grep { .. } => CommandName::Grep,
        }
    }
}

/// Validated command for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    name: CommandName,
    params: CommandParams,
}

impl CommandContext {
    pub(crate) fn new(params: CommandParams) -> Self {
        Self {
            name: params.name(),
            params,
        }
    }

    pub fn name(&self) -> CommandName {
        self.name
    }

    pub fn params(&self) -> &CommandParams {
        &self.params
    }
}
