use clap::Parser;
use std::path::PathBuf;

use crate::OutputFormat;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Unattended directory inventory into a compressed daily log archive.
#[derive(Clone, Parser)]
#[command(name = "dirlog")]
#[command(about = "List every readable file under DIR into <output-dir>/<yyyyMMdd>.zip. Ctrl+C stops cleanly.")]
pub struct Cli {
    /// Directory to list. Default: current directory.
    #[arg(value_name = "DIR", default_value = DefaultArgs::DIR)]
    pub dir: PathBuf,

    /// Directory that holds the log archive. Default: current directory.
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Log entry format.
    #[arg(long, short = 'F', value_enum)]
    pub format: Option<OutputFormat>,

    /// Archive file name instead of the date-derived `yyyyMMdd.zip`.
    #[arg(long)]
    pub archive_name: Option<String>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Show a live file counter.
    #[arg(long, short = 'p', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub progress: Option<bool>,
}
