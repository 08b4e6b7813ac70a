//! dirlog CLI: list a directory tree into a compressed daily log archive.

use anyhow::Result;
use clap::Parser;
use dirlog::engine::arg_parser::Cli;
use dirlog::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
