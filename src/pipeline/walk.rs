//! Traversal engine: explicit-stack directory walk feeding the log sink.

use log::{debug, info};
use std::path::Path;

use crate::error::ScanResult;
use crate::sink::{LogSink, SinkTarget};

use super::context::RunState;
use super::error_handler::contain_recoverable;
use super::events::{CancelToken, ScanEvent};
use super::metadata::FileSystem;

/// How the walk loop ended. Fatal errors come back as `Err` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    Completed,
    Cancelled,
}

/// Single-threaded walker for one run.
pub struct TraversalEngine<'a, F: FileSystem> {
    fs: &'a F,
    cancel: &'a CancelToken,
    on_event: &'a mut dyn FnMut(ScanEvent),
    state: RunState,
}

impl<'a, F: FileSystem> TraversalEngine<'a, F> {
    pub fn new(
        fs: &'a F,
        root: &Path,
        cancel: &'a CancelToken,
        on_event: &'a mut dyn FnMut(ScanEvent),
    ) -> Self {
        TraversalEngine {
            fs,
            cancel,
            on_event,
            state: RunState::new(root),
        }
    }

    pub fn directories_visited(&self) -> u64 {
        self.state.directories_visited
    }

    pub fn files_recorded(&self) -> u64 {
        self.state.files_recorded
    }

    /// Walk until the stack empties or cancellation is observed, appending one record per
    /// readable file. Access-denied and not-found are contained; other errors end the walk.
    ///
    /// The cancel token is only checked before each file. A request raised while the
    /// remaining directories hold no files is not observed, and the walk ends `Completed`.
    pub fn walk<W: SinkTarget>(&mut self, sink: &mut LogSink<W>) -> ScanResult<WalkOutcome> {
        while let Some(dir) = self.state.pending.pop() {
            self.state.directories_visited += 1;
            (self.on_event)(ScanEvent::DirectoryStarted {
                path: dir.clone(),
                directory_count: self.state.directories_visited,
            });

            let listing = self
                .fs
                .list_subdirectories(&dir)
                .and_then(|subdirs| Ok((subdirs, self.fs.list_files(&dir)?)));
            let (subdirs, files) = match listing {
                Ok(listing) => listing,
                Err(err) => {
                    contain_recoverable(err, &mut *self.on_event)?;
                    continue;
                }
            };

            for file in files {
                if self.cancel.is_cancelled() {
                    info!(
                        "Cancelled in {}; {} directories left unvisited",
                        dir.display(),
                        self.state.pending.len()
                    );
                    self.state.abandon();
                    return Ok(WalkOutcome::Cancelled);
                }
                let record = match self.fs.read_record(&file) {
                    Ok(record) => record,
                    Err(err) => {
                        contain_recoverable(err, &mut *self.on_event)?;
                        continue;
                    }
                };
                sink.append(&record)?;
                self.state.files_recorded += 1;
                (self.on_event)(ScanEvent::FileProcessed {
                    name: record.name,
                    file_count: self.state.files_recorded,
                });
            }

            self.state.pending.extend(subdirs);
        }
        debug!(
            "Walk finished: {} directories, {} files",
            self.state.directories_visited, self.state.files_recorded
        );
        Ok(WalkOutcome::Completed)
    }
}
