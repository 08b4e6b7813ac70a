//! dirlog: unattended directory inventory into a compressed, always-well-formed log.

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod sink;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::{ScanError, ScanResult};
pub use pipeline::{CancelToken, ScanEvent};
pub use record::FileRecord;
pub use types::*;

use log::debug;
use std::path::Path;

use pipeline::{LocalFs, run_scan};

/// Single entry point: list `root` into the log archive described by `opts`, on the
/// calling thread, and return the run report.
///
/// - **`cancel: Some(token)`** → the walk stops at the next file once the token is set
///   (e.g. from a signal handler or another thread). `None` runs to completion.
/// - **`on_event: Some(f)`** → `f` receives every progress/status event in order. Keep it
///   fast or send to a channel. For a background run with a channel use
///   [`Scanner`](crate::engine::Scanner).
pub fn list_dir<F>(
    root: &Path,
    opts: &ScanOpts,
    cancel: Option<&CancelToken>,
    on_event: Option<F>,
) -> ScanResult<RunReport>
where
    F: FnMut(ScanEvent),
{
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    let idle = CancelToken::new();
    let cancel = cancel.unwrap_or(&idle);
    match on_event {
        None => run_scan(root, opts, &LocalFs, cancel, &mut |_: ScanEvent| {}),
        Some(mut f) => run_scan(root, opts, &LocalFs, cancel, &mut f),
    }
}
