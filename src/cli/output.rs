//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ToolError;

/// Stage label used for argument validation failures.
pub const PARSE_STAGE: &str = "parse";

/// Map an error to the line printed on stderr, prefixed by the stage that raised it
/// (`parse` or the command name).
pub fn map_error(stage: &str, e: &ToolError) -> String {
    format!("{} error: {}", stage, e)
}
