//! Error types for a scan run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while starting, running or finalizing a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The designated root does not exist or is not a directory.
    #[error("Root path is not a directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// Permission denied for a directory or file.
    #[error("Access denied: {} ({source})", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory or file vanished between listing and reading.
    #[error("Path not found: {} ({source})", path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Releasing the log archive failed. Reported, never changes the run outcome.
    #[error("Problem encountered closing the log file {}: {source}", path.display())]
    SinkFinalization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A run is already in progress on this scanner.
    #[error("A scan is already running")]
    AlreadyRunning,

    /// The log archive could not be read or written.
    #[error("Log archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Any other I/O failure at a known path. Fatal for the run.
    #[error("I/O error at {}: {source}", path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure with no path attached (sink writes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Classify an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied { path, source },
            std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory => {
                Self::PathNotFound { path, source }
            }
            _ => Self::Unexpected { path, source },
        }
    }

    /// True for the directory/file level conditions the walk skips past.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::AccessDenied { .. } | Self::PathNotFound { .. }
        )
    }
}

/// Result alias for scan operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;
