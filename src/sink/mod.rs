//! Serializing log sink: document framing over a compressed archive entry.

pub mod archive;
pub mod log_sink;

pub use archive::{ArchiveEntry, next_entry_name};
pub use log_sink::{LogSink, SinkTarget};

use chrono::Local;
use std::path::PathBuf;

use crate::error::{ScanError, ScanResult};
use crate::utils::config::ArchiveConsts;
use crate::{ArtifactLocation, ScanOpts};

/// Sink writing into the daily log archive.
pub type ArchiveSink = LogSink<ArchiveEntry>;

/// Archive path for `opts`: explicit name, or today's `yyyyMMdd.zip`, under `output_dir`.
pub fn archive_path_for(opts: &ScanOpts) -> PathBuf {
    let name = opts
        .archive_name
        .clone()
        .unwrap_or_else(|| ArchiveConsts::archive_name_for(Local::now()));
    opts.output_dir.join(name)
}

/// Open the archive, start a fresh entry and write the prologue.
pub fn open_log_sink(opts: &ScanOpts) -> ScanResult<(ArchiveSink, ArtifactLocation)> {
    std::fs::create_dir_all(&opts.output_dir).map_err(|source| ScanError::Unexpected {
        path: opts.output_dir.clone(),
        source,
    })?;
    let archive_path = archive_path_for(opts);
    let entry = ArchiveEntry::create(&archive_path)?;
    let location = ArtifactLocation {
        archive_path: archive_path.clone(),
        entry_name: entry.entry_name().to_string(),
    };
    log::debug!(
        "Logging to {} :: {}",
        location.archive_path.display(),
        location.entry_name
    );
    let sink = LogSink::new(entry, opts.format, &archive_path)?;
    Ok((sink, location))
}
