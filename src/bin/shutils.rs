//! Shutils CLI Binary
//!
//! Command-line entry point: echo, cat, ls, find and grep.

use clap::Parser;
use shutils::cli::{map_error, validate, Cli, RunContext, PARSE_STAGE};
use shutils::config::{ConfigLoader, ToolConfig};
use shutils::logging::{init_logging, LoggingConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error("startup", &e));
            process::exit(1);
        }
    };

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("{}", map_error("startup", &e));
        process::exit(1);
    }

    info!("Shutils CLI starting");

    let command = match validate(cli.args.as_slice()) {
        Ok(command) => command,
        Err(e) => {
            error!(error = %e, "Argument validation failed");
            eprintln!("{}", map_error(PARSE_STAGE, &e));
            process::exit(1);
        }
    };

    let context = RunContext::new(PathBuf::from("."), &config);
    match context.execute(&command) {
        Ok(output) => {
            info!(command = %command.name(), "Command completed successfully");
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(&output).and_then(|_| stdout.flush()) {
                error!(error = %e, "Failed to write output");
                process::exit(1);
            }
        }
        Err(e) => {
            error!(command = %command.name(), error = %e, "Command failed");
            eprintln!("{}", map_error(command.name().as_str(), &e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<ToolConfig, shutils::error::ToolError> {
    match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(Path::new(".")),
    }
}

/// Build logging configuration from CLI args and the loaded config file.
///
/// Logging is off unless `--verbose` or `--log-level` is given, whatever the config
/// file says. Once a flag turns it on, the config file's logging settings apply and
/// the remaining CLI flags override them.
fn build_logging_config(cli: &Cli, config: &ToolConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    // Logging stays off unless asked for on the command line.
    if !cli.verbose && cli.log_level.is_none() {
        logging.level = "off".to_string();
        return logging;
    }

    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }

    logging
}
