//! cat: print every requested file through the concurrent aggregator.

use crate::aggregate::{Aggregation, Aggregator};
use crate::error::ToolError;
use std::path::PathBuf;
use tracing::warn;

/// Printed instead of any content when the deadline elapses.
pub const TIMEOUT_NOTICE: &str = "Timeout occurred";

/// Run the aggregation on a dedicated runtime and render its outcome.
pub fn cat(aggregator: &Aggregator, paths: &[PathBuf]) -> Result<Vec<u8>, ToolError> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| ToolError::Runtime(e.to_string()))?;
    let outcome = rt.block_on(aggregator.aggregate(paths));
    // Blocking reads that outlived the coordinator are not waited for.
    rt.shutdown_background();
    Ok(render_aggregation(&outcome?))
}

/// Each content byte-for-byte followed by a newline, or the timeout notice.
pub fn render_aggregation(outcome: &Aggregation) -> Vec<u8> {
    match outcome {
        Aggregation::Complete(contents) => {
            let mut output = Vec::with_capacity(contents.iter().map(|c| c.len() + 1).sum());
            for content in contents {
                output.extend_from_slice(content);
                output.push(b'\n');
            }
            output
        }
        Aggregation::TimedOut => {
            warn!("Timed out before every file was read");
            format!("{}\n", TIMEOUT_NOTICE).into_bytes()
        }
    }
}
