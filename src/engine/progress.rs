//! Console rendering of scan events: kdam counter plus colored status lines.

use kdam::{Animation, Bar, BarExt};
use std::sync::{Arc, Mutex};

use crate::pipeline::ScanEvent;
use crate::utils::Colors;

// Progress bar type alias
pub type ProgressBar = Arc<Mutex<Bar>>;

/// Create a counter for unknown total (shows count without percentage)
pub fn create_counter(desc: &'static str) -> ProgressBar {
    Arc::new(Mutex::new(kdam::tqdm!(
        total = 0,
        desc = desc,
        animation = Animation::Classic,
        position = 0,
        unit = " files"
    )))
}

/// Update progress bar if available
/// Uses try_lock to avoid blocking if mutex is contended (non-blocking)
pub fn update_progress_bar(pb: &ProgressBar, n: usize) {
    if let Ok(mut pb) = pb.try_lock() {
        let _ = pb.update(n);
    }
}

fn set_directory_postfix(pb: &ProgressBar, directory_count: u64) {
    if let Ok(mut pb) = pb.try_lock() {
        pb.set_postfix(format!("dirs={directory_count}"));
        let _ = pb.refresh();
    }
}

/// Color a status line by what it reports.
pub fn colorize_status(line: &str) -> String {
    match line {
        "Done!" => Colors::success(line),
        "Canceled!" => Colors::warning(line),
        "Start" => Colors::status(line),
        l if l.starts_with("Error:") => Colors::error(l),
        l => Colors::warning(l),
    }
}

/// Apply one event to the console. Status lines go above the bar when one is shown.
pub fn render_event(event: &ScanEvent, bar: Option<&ProgressBar>) {
    match event {
        ScanEvent::DirectoryStarted {
            path,
            directory_count,
        } => {
            log::debug!("[{}] {}", directory_count, path.display());
            if let Some(bar) = bar {
                set_directory_postfix(bar, *directory_count);
            }
        }
        ScanEvent::FileProcessed { .. } => {
            if let Some(bar) = bar {
                update_progress_bar(bar, 1);
            }
        }
        ScanEvent::Status(line) => {
            let line = colorize_status(line);
            match bar.map(|b| b.lock()) {
                Some(Ok(mut b)) => {
                    let _ = b.write(line);
                }
                _ => eprintln!("{line}"),
            }
        }
    }
}
