use log::{error, info, warn};
use std::path::Path;

use crate::engine::tools::resolve_root;
use crate::error::ScanResult;
use crate::sink::{LogSink, SinkTarget, open_log_sink};
use crate::utils::config::StatusText;
use crate::{RunOutcome, RunReport, ScanOpts};

use super::events::{CancelToken, ScanEvent};
use super::metadata::FileSystem;
use super::walk::{TraversalEngine, WalkOutcome};

/// One full run: validate root → open sink → walk → close sink → terminal status.
///
/// `Err` is returned only when the run never got going (invalid root, archive could not
/// be opened). Once the sink is open every ending is reported through
/// [`RunReport::outcome`], and the sink is closed on every path.
pub fn run_scan<F: FileSystem>(
    root: &Path,
    opts: &ScanOpts,
    fs: &F,
    cancel: &CancelToken,
    on_event: &mut dyn FnMut(ScanEvent),
) -> ScanResult<RunReport> {
    let root = resolve_root(fs, root)?;
    on_event(ScanEvent::Status(StatusText::START.to_string()));

    let (mut sink, artifact) = match open_log_sink(opts) {
        Ok(opened) => opened,
        Err(e) => {
            error!("{}", e);
            on_event(ScanEvent::Status(
                RunOutcome::Failed(e.to_string()).status_line(),
            ));
            return Err(e);
        }
    };
    info!(
        "Listing {} into {} ({}, {})",
        root.display(),
        artifact.archive_path.display(),
        artifact.entry_name,
        opts.format
    );

    let (outcome, directories, files) = {
        let mut engine = TraversalEngine::new(fs, &root, cancel, &mut *on_event);
        let outcome = match engine.walk(&mut sink) {
            Ok(WalkOutcome::Completed) => RunOutcome::Completed,
            Ok(WalkOutcome::Cancelled) => RunOutcome::Cancelled,
            Err(e) => {
                error!("Scan aborted: {}", e);
                RunOutcome::Failed(e.to_string())
            }
        };
        (outcome, engine.directories_visited(), engine.files_recorded())
    };

    let close_warning = close_and_report(sink, &outcome, on_event);

    Ok(RunReport {
        outcome,
        directories,
        files,
        artifact,
        close_warning,
    })
}

/// Close the sink for `outcome`, then emit the terminal status. A close failure becomes a
/// warning status ahead of the terminal line and never changes the outcome; its message is
/// returned for [`RunReport::close_warning`].
pub fn close_and_report<W: SinkTarget>(
    sink: LogSink<W>,
    outcome: &RunOutcome,
    on_event: &mut dyn FnMut(ScanEvent),
) -> Option<String> {
    let close_warning = match sink.close(*outcome == RunOutcome::Completed) {
        Ok(_) => None,
        Err(e) => {
            warn!("{}", e);
            on_event(ScanEvent::Status(e.to_string()));
            Some(e.to_string())
        }
    };
    on_event(ScanEvent::Status(outcome.status_line()));
    close_warning
}
