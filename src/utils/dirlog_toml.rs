//! Load `.dirlog.toml` from the working directory (CLI only). The root to scan is never
//! read from the file; lib callers pass everything through [`ScanOpts`](crate::ScanOpts).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::OutputFormat;
use crate::engine::cli::CliOpts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Deserialize)]
pub(crate) struct DirlogToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    output_dir: Option<String>,
    archive_name: Option<String>,
    format: Option<OutputFormat>,
    verbose: Option<bool>,
    progress: Option<bool>,
}

/// Load the config file from `dir` if present. A file that exists but does not parse is
/// an error rather than a silent fallback to defaults.
pub(crate) fn load_dirlog_toml(dir: &Path) -> Result<Option<DirlogToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    let Ok(s) = std::fs::read_to_string(&path) else {
        return Ok(None);
    };
    parse_dirlog_toml(&s)
        .map(Some)
        .with_context(|| format!("parse {}", path.display()))
}

pub(crate) fn parse_dirlog_toml(s: &str) -> Result<DirlogToml, toml::de::Error> {
    toml::from_str(s)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
pub(crate) fn apply_file_to_opts(file: &DirlogToml, opts: &mut CliOpts) {
    let sec = &file.settings;
    if let Some(ref p) = sec.output_dir {
        opts.scan.output_dir = PathBuf::from(p);
    }
    if let Some(ref name) = sec.archive_name {
        opts.scan.archive_name = Some(name.clone());
    }
    apply_file_opt!(sec, opts.scan, format => format);
    apply_file_opt!(sec, opts, verbose => verbose);
    apply_file_opt!(sec, opts, progress => progress);
}
