//! Public types for the dirlog API: options, outcomes and run reports.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Encoding of the log entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"Files":[...]}` document.
    #[default]
    Json,
    /// Header row, one row per file, `End of data` trailer on completion.
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Options for a scan run (CLI and lib).
#[derive(Clone, Debug)]
pub struct ScanOpts {
    /// Directory that holds the daily log archive.
    pub output_dir: PathBuf,
    /// Archive file name. When None, derived from today's local date (`yyyyMMdd.zip`).
    pub archive_name: Option<String>,
    /// Encoding of the log entry.
    pub format: OutputFormat,
}

impl Default for ScanOpts {
    fn default() -> Self {
        ScanOpts {
            output_dir: PathBuf::from("."),
            archive_name: None,
            format: OutputFormat::Json,
        }
    }
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
    Failed(String),
}

impl RunOutcome {
    /// Terminal status line shown to the controller.
    pub fn status_line(&self) -> String {
        match self {
            RunOutcome::Completed => "Done!".to_string(),
            RunOutcome::Cancelled => "Canceled!".to_string(),
            RunOutcome::Failed(reason) => format!("Error: {reason}"),
        }
    }
}

/// Where a run's records were written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactLocation {
    pub archive_path: PathBuf,
    pub entry_name: String,
}

/// Summary of a finished run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub directories: u64,
    pub files: u64,
    pub artifact: ArtifactLocation,
    /// Set when releasing the archive failed. The outcome is left as is.
    pub close_warning: Option<String>,
}
