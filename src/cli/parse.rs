//! CLI parse: clap types for shutils. No behavior; definitions only.
//!
//! Global options come first; everything from the command word onward is kept
//! verbatim and handed to the argument validator.

use clap::Parser;
use std::path::PathBuf;

/// shutils - echo, cat, ls, find and grep for the working directory
#[derive(Parser, Debug)]
#[command(name = "shutils")]
#[command(about = "Minimal echo, cat, ls, find and grep for the current working directory")]
pub struct Cli {
    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, off)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Command word followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
