//! Compressed log container: a zip archive that gains one new entry per run.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{ScanError, ScanResult};
use crate::utils::config::ArchiveConsts;

use super::log_sink::SinkTarget;

/// First `Log<N>.txt` not already present in `taken`.
pub fn next_entry_name(taken: &HashSet<String>) -> String {
    let mut counter = ArchiveConsts::FIRST_ENTRY;
    while taken.contains(&ArchiveConsts::entry_name(counter)) {
        counter += 1;
    }
    ArchiveConsts::entry_name(counter)
}

/// Writable text entry inside the archive. Owns the archive writer and its file handle
/// until [`SinkTarget::finish`].
pub struct ArchiveEntry {
    zip: Option<ZipWriter<File>>,
    entry_name: String,
}

impl ArchiveEntry {
    /// Create the archive if absent, otherwise open it for update, and start a new
    /// uniquely-named deflated entry. Existing entries are kept untouched.
    pub fn create(archive_path: &Path) -> ScanResult<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(archive_path)
            .map_err(|source| ScanError::Unexpected {
                path: archive_path.to_path_buf(),
                source,
            })?;

        let (mut zip, entry_name) = if file.metadata()?.len() == 0 {
            (
                ZipWriter::new(file),
                ArchiveConsts::entry_name(ArchiveConsts::FIRST_ENTRY),
            )
        } else {
            let taken: HashSet<String> = {
                let archive = ZipArchive::new(&mut file)?;
                archive.file_names().map(str::to_owned).collect()
            };
            debug!(
                "{} already holds {} entries",
                archive_path.display(),
                taken.len()
            );
            let name = next_entry_name(&taken);
            (ZipWriter::new_append(file)?, name)
        };

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(entry_name.clone(), options)?;

        Ok(ArchiveEntry {
            zip: Some(zip),
            entry_name,
        })
    }

    pub fn entry_name(&self) -> &str {
        &self.entry_name
    }

    fn writer(&mut self) -> io::Result<&mut ZipWriter<File>> {
        self.zip
            .as_mut()
            .ok_or_else(|| io::Error::other("log archive already finished"))
    }
}

impl Write for ArchiveEntry {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl SinkTarget for ArchiveEntry {
    /// Write the central directory, then sync and release the file handle.
    fn finish(&mut self) -> io::Result<()> {
        let Some(zip) = self.zip.take() else {
            return Ok(());
        };
        let file = zip.finish().map_err(io::Error::other)?;
        file.sync_all()?;
        drop(file);
        Ok(())
    }
}
