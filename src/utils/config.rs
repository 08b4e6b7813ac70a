//! Application configuration constants.
//! Names, framing and status text in one place.

use chrono::{DateTime, Local};
use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
    scan_thread_name: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
                scan_thread_name: format!("{pkg}-scan"),
            }
        })
    }

    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    pub fn scan_thread_name(&self) -> &str {
        &self.scan_thread_name
    }
}

// ---- Log archive ----

/// Archive and entry naming.
pub struct ArchiveConsts;

impl ArchiveConsts {
    /// strftime pattern for the daily archive name.
    pub const DATE_FORMAT: &'static str = "%Y%m%d";
    pub const ARCHIVE_EXTENSION: &'static str = "zip";
    /// Entries are `Log1.txt`, `Log2.txt`, ...
    pub const ENTRY_PREFIX: &'static str = "Log";
    pub const ENTRY_EXTENSION: &'static str = "txt";
    /// First entry counter tried in a fresh archive.
    pub const FIRST_ENTRY: u32 = 1;

    /// Daily archive name for `now`, e.g. `20240101.zip`.
    pub fn archive_name_for(now: DateTime<Local>) -> String {
        format!(
            "{}.{}",
            now.format(Self::DATE_FORMAT),
            Self::ARCHIVE_EXTENSION
        )
    }

    pub fn entry_name(counter: u32) -> String {
        format!(
            "{}{}.{}",
            Self::ENTRY_PREFIX,
            counter,
            Self::ENTRY_EXTENSION
        )
    }
}

// ---- Document framing ----

pub struct Framing;

impl Framing {
    pub const JSON_PROLOGUE: &'static str = "{\"Files\":[";
    pub const JSON_EPILOGUE: &'static str = "]}";
    pub const CSV_TRAILER: &'static str = "End of data";
}

// ---- Status lines ----

/// Lifecycle status text sent to the controller.
pub struct StatusText;

impl StatusText {
    pub const START: &'static str = "Start";
}

// ---- Progress ----

pub struct ProgressConsts;

impl ProgressConsts {
    /// Description shown on the kdam counter.
    pub const COUNTER_DESC: &'static str = "Listing";
}
