//! Engine → controller events and controller → engine cancellation.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Progress and status delivered to the controller, in production order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanEvent {
    /// A directory was popped from the pending stack. `directory_count` includes it.
    DirectoryStarted { path: PathBuf, directory_count: u64 },
    /// A record was written. `file_count` includes it.
    FileProcessed { name: String, file_count: u64 },
    /// Lifecycle notice or recoverable failure, one line each.
    Status(String),
}

/// Unbounded so the walk never blocks on a slow consumer; FIFO keeps event order.
pub fn create_event_channel() -> (Sender<ScanEvent>, Receiver<ScanEvent>) {
    unbounded()
}

/// Cooperative stop request shared between controller and engine.
/// The engine polls it once per file.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
