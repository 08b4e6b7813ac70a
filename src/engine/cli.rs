//! CLI command handler: start a run, forward Ctrl+C as a stop request, render events.

use anyhow::{Context, Result, bail};
use log::debug;
use std::sync::Arc;

use crate::engine::arg_parser::Cli;
use crate::engine::controller::Scanner;
use crate::engine::progress::{create_counter, render_event};
use crate::utils::config::ProgressConsts;
use crate::utils::dirlog_toml::{apply_file_to_opts, load_dirlog_toml};
use crate::utils::{Colors, setup_logging};
use crate::{RunOutcome, RunReport, ScanOpts};

/// Resolved CLI options: scan options plus console behaviour.
#[derive(Clone, Debug, Default)]
pub struct CliOpts {
    pub scan: ScanOpts,
    pub verbose: bool,
    pub progress: bool,
}

/// Defaults, then `.dirlog.toml` from the working directory, then explicit flags.
fn setup_opts(cli: &Cli) -> Result<CliOpts> {
    let mut opts = CliOpts::default();
    let cwd = std::env::current_dir().context("read working directory")?;
    if let Some(file) = load_dirlog_toml(&cwd)? {
        apply_file_to_opts(&file, &mut opts);
    }
    if let Some(ref dir) = cli.output_dir {
        opts.scan.output_dir = dir.clone();
    }
    if let Some(ref name) = cli.archive_name {
        opts.scan.archive_name = Some(name.clone());
    }
    if let Some(format) = cli.format {
        opts.scan.format = format;
    }
    if let Some(verbose) = cli.verbose {
        opts.verbose = verbose;
    }
    if let Some(progress) = cli.progress {
        opts.progress = progress;
    }
    setup_logging(opts.verbose);
    Ok(opts)
}

fn print_summary(report: &RunReport) {
    let entry = format!(
        "{} :: {}",
        report.artifact.archive_path.display(),
        report.artifact.entry_name
    );
    println!(
        "{} directories, {} files -> {}",
        report.directories, report.files, entry
    );
    if let Some(ref warning) = report.close_warning {
        println!("{}", Colors::warning(warning));
    }
}

/// List `cli.dir` into the log archive. Returns an error when the run could not start or
/// ended as failed; a cancelled run is a success with a partial log.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli)?;
    debug!("{:#?}", opts);

    let scanner = Arc::new(Scanner::new(opts.scan.clone()));
    let scanner_handler = Arc::clone(&scanner);
    ctrlc::set_handler(move || scanner_handler.request_cancel())
        .context("set Ctrl+C handler")?;

    let run = scanner
        .start_run(&cli.dir)
        .with_context(|| format!("start scan of {}", cli.dir.display()))?;
    let mut bar = opts
        .progress
        .then(|| create_counter(ProgressConsts::COUNTER_DESC));
    for event in run.events().iter() {
        render_event(&event, bar.as_ref());
    }
    if bar.take().is_some() {
        eprintln!();
    }

    let report = run.wait().context("scan thread")?;
    print_summary(&report);
    if let RunOutcome::Failed(reason) = report.outcome {
        bail!("scan failed: {reason}");
    }
    Ok(())
}
