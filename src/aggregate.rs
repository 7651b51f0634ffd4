//! Concurrent whole-file aggregation used by `cat`.
//!
//! One worker task per requested path. Successful reads flow through an unbounded
//! completion stream; the first failed read claims a single-slot failure signal and
//! every later failure is discarded. A barrier task owns the worker set and closes
//! the completion stream once every worker has finished. The coordinator races the
//! failure signal, a wall-clock deadline and the barrier.
//!
//! On failure or timeout the barrier is aborted, which drops the worker set and
//! cancels reads still in flight.

use crate::error::ToolError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Default wait window for a `cat` invocation.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(1);

/// Source of whole-file contents
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Read the entire content at `path`.
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads files from the local filesystem, bytes unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

#[async_trait]
impl ContentReader for FsReader {
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

/// Result of an aggregation that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregation {
    /// Every read succeeded; raw contents are in completion order
    Complete(Vec<Vec<u8>>),
    /// The deadline elapsed first; nothing is flushed
    TimedOut,
}

/// Holds at most one error. The first publisher wins.
pub struct FailureSlot {
    sender: Mutex<Option<oneshot::Sender<ToolError>>>,
}

impl FailureSlot {
    /// Empty slot plus the receiving end the coordinator waits on.
    pub fn channel() -> (Self, oneshot::Receiver<ToolError>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                sender: Mutex::new(Some(tx)),
            },
            rx,
        )
    }

    /// Publish `err` if the slot is still empty. Returns false when it was already claimed.
    pub fn publish(&self, err: ToolError) -> bool {
        match self.sender.lock().take() {
            Some(tx) => {
                // The coordinator may have stopped listening; the slot is claimed regardless.
                let _ = tx.send(err);
                true
            }
            None => false,
        }
    }
}

/// Fans reads out across worker tasks and collects them under a deadline.
#[derive(Clone)]
pub struct Aggregator {
    reader: Arc<dyn ContentReader>,
    deadline: Duration,
}

impl Aggregator {
    pub fn new(reader: Arc<dyn ContentReader>, deadline: Duration) -> Self {
        Self { reader, deadline }
    }

    /// Aggregator over the local filesystem.
    pub fn filesystem(deadline: Duration) -> Self {
        Self::new(Arc::new(FsReader), deadline)
    }

    /// Read every path concurrently.
    ///
    /// Returns the first read error, [`Aggregation::TimedOut`] when the deadline elapses
    /// before all reads finish, or all contents in completion order.
    pub async fn aggregate(&self, paths: &[PathBuf]) -> Result<Aggregation, ToolError> {
        let deadline = tokio::time::sleep(self.deadline);
        tokio::pin!(deadline);

        let (content_tx, mut content_rx) = mpsc::unbounded_channel::<Vec<u8>>();
        let (slot, mut failure_rx) = FailureSlot::channel();
        let slot = Arc::new(slot);

        let mut workers = JoinSet::new();
        for (index, path) in paths.iter().enumerate() {
            let reader = Arc::clone(&self.reader);
            let slot = Arc::clone(&slot);
            let content_tx = content_tx.clone();
            let path = path.clone();
            workers.spawn(async move {
                match reader.read(&path).await {
                    Ok(content) => {
                        debug!(
                            worker = index,
                            path = %path.display(),
                            bytes = content.len(),
                            "Read complete"
                        );
                        // Receiver only goes away once the coordinator has returned.
                        let _ = content_tx.send(content);
                    }
                    Err(source) => {
                        let claimed = slot.publish(ToolError::Read {
                            path: path.clone(),
                            source,
                        });
                        if !claimed {
                            debug!(
                                worker = index,
                                path = %path.display(),
                                "Dropping read failure, slot already claimed"
                            );
                        }
                    }
                }
            });
        }
        // Workers now hold the only references to the slot.
        drop(slot);

        let mut barrier = tokio::spawn(async move {
            while let Some(joined) = workers.join_next().await {
                if let Err(e) = joined {
                    warn!(error = %e, "Read worker did not complete");
                }
            }
            drop(content_tx);
        });

        let failure = tokio::select! {
            biased;
            Ok(err) = &mut failure_rx => Some(err),
            _ = &mut deadline => {
                barrier.abort();
                info!(
                    files = paths.len(),
                    deadline_ms = self.deadline.as_millis() as u64,
                    "Aggregation deadline elapsed"
                );
                return Ok(Aggregation::TimedOut);
            }
            _ = &mut barrier => failure_rx.try_recv().ok(),
        };

        if let Some(err) = failure {
            barrier.abort();
            return Err(err);
        }

        let mut contents = Vec::with_capacity(paths.len());
        while let Some(content) = content_rx.recv().await {
            contents.push(content);
        }
        debug!(files = contents.len(), "Aggregation complete");
        Ok(Aggregation::Complete(contents))
    }
}
