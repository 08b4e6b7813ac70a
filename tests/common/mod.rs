//! Shared fixtures: scratch trees, filesystem wrappers that inject failures, artifact readers.

#![allow(dead_code)]

use crossbeam_channel::Receiver;
use dirlog::pipeline::{FileSystem, LocalFs};
use dirlog::record::CSV_HEADER;
use dirlog::{ArtifactLocation, FileRecord, OutputFormat, ScanError, ScanEvent, ScanOpts, ScanResult};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ARCHIVE_NAME: &str = "audit.zip";

/// Scratch root plus a separate output directory.
pub struct Scratch {
    pub root: TempDir,
    pub out: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Scratch {
            root: tempfile::tempdir().unwrap(),
            out: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn opts(&self, format: OutputFormat) -> ScanOpts {
        ScanOpts {
            output_dir: self.out.path().to_path_buf(),
            archive_name: Some(ARCHIVE_NAME.to_string()),
            format,
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.out.path().join(ARCHIVE_NAME)
    }

    /// Create `rel` (and parents) with some content.
    pub fn touch(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, rel.as_bytes()).unwrap();
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

pub fn read_entry(loc: &ArtifactLocation) -> String {
    let file = File::open(&loc.archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(&loc.entry_name).unwrap();
    let mut text = String::new();
    entry.read_to_string(&mut text).unwrap();
    text
}

pub fn entry_names(archive_path: &Path) -> Vec<String> {
    let file = File::open(archive_path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    names.sort();
    names
}

/// Parse a JSON log entry and return its `Files` array. Panics if not well-formed.
pub fn json_files(text: &str) -> Vec<Value> {
    let doc: Value = serde_json::from_str(text).expect("log entry is valid JSON");
    doc["Files"].as_array().expect("Files array").clone()
}

/// Split a CSV log entry into data rows, checking the header and row shape.
/// Returns (rows, has_trailer).
pub fn csv_rows(text: &str) -> (Vec<Vec<String>>, bool) {
    let mut lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first().copied(), Some(CSV_HEADER));
    lines.remove(0);
    let has_trailer = lines.last() == Some(&"End of data");
    if has_trailer {
        lines.pop();
    }
    let rows = lines
        .iter()
        .map(|l| l.split(',').map(str::to_owned).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    for row in &rows {
        assert_eq!(row.len(), 4, "row shape: {:?}", row);
    }
    (rows, has_trailer)
}

pub fn statuses(events: &[ScanEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            ScanEvent::Status(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

fn denied(path: &Path) -> ScanError {
    ScanError::io(path, io::Error::from(io::ErrorKind::PermissionDenied))
}

/// Local filesystem where listing one directory is denied.
#[derive(Clone)]
pub struct DenyDirFs {
    pub denied: PathBuf,
}

impl FileSystem for DenyDirFs {
    fn is_directory(&self, path: &Path) -> bool {
        LocalFs.is_directory(path)
    }

    fn list_subdirectories(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        if dir == self.denied {
            return Err(denied(dir));
        }
        LocalFs.list_subdirectories(dir)
    }

    fn list_files(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        LocalFs.list_files(dir)
    }

    fn read_record(&self, file: &Path) -> ScanResult<FileRecord> {
        LocalFs.read_record(file)
    }
}

/// Local filesystem whose listing of `dir` also reports a file that does not exist.
#[derive(Clone)]
pub struct GhostFileFs {
    pub dir: PathBuf,
}

impl FileSystem for GhostFileFs {
    fn is_directory(&self, path: &Path) -> bool {
        LocalFs.is_directory(path)
    }

    fn list_subdirectories(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        LocalFs.list_subdirectories(dir)
    }

    fn list_files(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        let mut files = LocalFs.list_files(dir)?;
        if dir == self.dir {
            files.insert(0, dir.join("ghost.txt"));
        }
        Ok(files)
    }

    fn read_record(&self, file: &Path) -> ScanResult<FileRecord> {
        LocalFs.read_record(file)
    }
}

/// Local filesystem where reading files named `broken` fails with an unexpected error.
#[derive(Clone)]
pub struct BrokenReadFs {
    pub broken: String,
}

impl FileSystem for BrokenReadFs {
    fn is_directory(&self, path: &Path) -> bool {
        LocalFs.is_directory(path)
    }

    fn list_subdirectories(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        LocalFs.list_subdirectories(dir)
    }

    fn list_files(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        LocalFs.list_files(dir)
    }

    fn read_record(&self, file: &Path) -> ScanResult<FileRecord> {
        if file.file_name().is_some_and(|n| n == self.broken.as_str()) {
            return Err(ScanError::io(file, io::Error::other("device error")));
        }
        LocalFs.read_record(file)
    }
}

/// Local filesystem that blocks every subdirectory listing until the gate sender is
/// dropped (or sends).
#[derive(Clone)]
pub struct GateFs {
    pub gate: Receiver<()>,
}

impl FileSystem for GateFs {
    fn is_directory(&self, path: &Path) -> bool {
        LocalFs.is_directory(path)
    }

    fn list_subdirectories(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        let _ = self.gate.recv();
        LocalFs.list_subdirectories(dir)
    }

    fn list_files(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        LocalFs.list_files(dir)
    }

    fn read_record(&self, file: &Path) -> ScanResult<FileRecord> {
        LocalFs.read_record(file)
    }
}
