//! Run controller: starts a scan on a background thread, forwards cancellation, and hands
//! the caller an ordered event stream.

use crossbeam_channel::Receiver;
use log::info;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crate::engine::tools::resolve_root;
use crate::error::{ScanError, ScanResult};
use crate::pipeline::{CancelToken, FileSystem, LocalFs, ScanEvent, create_event_channel, run_scan};
use crate::utils::config::PackagePaths;
use crate::{RunReport, ScanOpts};

/// Clears the running flag when the scan thread exits, panics included.
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// At most one run at a time per scanner.
pub struct Scanner<F = LocalFs> {
    opts: ScanOpts,
    fs: F,
    /// Token of the current (or last) run. Replaced under the lock when a run starts,
    /// and `request_cancel` checks `running` under the same lock.
    cancel: Mutex<CancelToken>,
    running: Arc<AtomicBool>,
}

impl Scanner<LocalFs> {
    pub fn new(opts: ScanOpts) -> Self {
        Self::with_fs(opts, LocalFs)
    }
}

impl<F> Scanner<F>
where
    F: FileSystem + Clone + Send + 'static,
{
    /// Scanner over a custom filesystem implementation.
    pub fn with_fs(opts: ScanOpts, fs: F) -> Self {
        Scanner {
            opts,
            fs,
            cancel: Mutex::new(CancelToken::new()),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start a run on a background thread. Fails while another run is active or when
    /// `root` is not a directory (nothing is written in either case).
    pub fn start_run(&self, root: &Path) -> ScanResult<RunHandle> {
        let mut slot = self.cancel.lock().unwrap_or_else(PoisonError::into_inner);
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ScanError::AlreadyRunning);
        }
        let guard = RunningGuard(Arc::clone(&self.running));
        let root = resolve_root(&self.fs, root)?;
        // Fresh token per run: a stop aimed at an earlier run cannot leak into this one.
        *slot = CancelToken::new();
        let cancel = slot.clone();
        drop(slot);

        let (event_tx, event_rx) = create_event_channel();
        let opts = self.opts.clone();
        let fs = self.fs.clone();
        let handle = thread::Builder::new()
            .name(PackagePaths::get().scan_thread_name().to_string())
            .spawn(move || {
                let _guard = guard;
                let mut send = |event: ScanEvent| {
                    // Receiver gone means nobody is watching; keep scanning.
                    let _ = event_tx.send(event);
                };
                run_scan(&root, &opts, &fs, &cancel, &mut send)
            })?;

        Ok(RunHandle {
            events: event_rx,
            handle,
        })
    }

    /// Ask the active run to stop at its next file boundary. No-op when idle.
    pub fn request_cancel(&self) {
        let slot = self.cancel.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_running() {
            info!("Stop requested; finishing current file");
            slot.cancel();
        }
    }
}

/// Handle to an active run.
pub struct RunHandle {
    events: Receiver<ScanEvent>,
    handle: JoinHandle<ScanResult<RunReport>>,
}

impl RunHandle {
    /// Ordered events for this run. Disconnects once the run has ended.
    pub fn events(&self) -> &Receiver<ScanEvent> {
        &self.events
    }

    /// Wait for the scan thread and return its report.
    pub fn wait(self) -> ScanResult<RunReport> {
        self.handle
            .join()
            .map_err(|_| ScanError::Io(std::io::Error::other("scan thread panicked")))?
    }
}
