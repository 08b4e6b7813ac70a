use crate::error::{ScanError, ScanResult};

use super::events::ScanEvent;

/// Contain a directory/file level failure: recoverable errors become one status line and
/// the walk moves on; anything else is handed back to end the run.
pub fn contain_recoverable(
    err: ScanError,
    on_event: &mut dyn FnMut(ScanEvent),
) -> ScanResult<()> {
    if !err.is_recoverable() {
        return Err(err);
    }
    log::warn!("Skipping: {}", err);
    on_event(ScanEvent::Status(err.to_string()));
    Ok(())
}
