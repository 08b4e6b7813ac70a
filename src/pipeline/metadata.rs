//! Directory listing and file metadata reads. The walk only touches the filesystem
//! through [`FileSystem`], so tests can inject access failures.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ScanError, ScanResult};
use crate::record::FileRecord;

/// Listing and metadata capability consumed by the traversal engine.
pub trait FileSystem {
    /// True when `path` exists and is a directory.
    fn is_directory(&self, path: &Path) -> bool;
    /// Immediate subdirectories of `dir`, in listing order.
    fn list_subdirectories(&self, dir: &Path) -> ScanResult<Vec<PathBuf>>;
    /// Immediate files of `dir`, in listing order.
    fn list_files(&self, dir: &Path) -> ScanResult<Vec<PathBuf>>;
    /// Read one file's metadata into a record.
    fn read_record(&self, file: &Path) -> ScanResult<FileRecord>;
}

/// [`FileSystem`] over `std::fs`. Symlinked directories are never descended; every other
/// non-directory entry is listed as a file.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    Directory,
    File,
}

fn list_children(dir: &Path, want: ChildKind) -> ScanResult<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))? {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                let err = ScanError::io(&path, e);
                if err.is_recoverable() {
                    debug!("Entry vanished while listing: {}", err);
                    continue;
                }
                return Err(err);
            }
        };
        // Anything that is not a directory is a file: regular files, FIFOs, sockets,
        // devices and symlinks. A symlink to a directory is not followed.
        let kind = if file_type.is_dir() {
            Some(ChildKind::Directory)
        } else if file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_dir()) {
            if want == ChildKind::Directory {
                debug!("Not following directory symlink {}", path.display());
            }
            None
        } else {
            Some(ChildKind::File)
        };
        if kind == Some(want) {
            children.push(path);
        }
    }
    Ok(children)
}

impl FileSystem for LocalFs {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_subdirectories(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        list_children(dir, ChildKind::Directory)
    }

    fn list_files(&self, dir: &Path) -> ScanResult<Vec<PathBuf>> {
        list_children(dir, ChildKind::File)
    }

    fn read_record(&self, file: &Path) -> ScanResult<FileRecord> {
        let meta = match fs::metadata(file) {
            Ok(meta) => meta,
            // Dangling symlink: record the link itself.
            Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::symlink_metadata(file) {
                Ok(link) if link.file_type().is_symlink() => link,
                _ => return Err(ScanError::io(file, e)),
            },
            Err(e) => return Err(ScanError::io(file, e)),
        };
        Ok(FileRecord::from_metadata(file, &meta))
    }
}
