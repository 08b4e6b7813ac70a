//! Pipeline components: run state, filesystem seam, walk loop, error containment, events.

pub mod context;
pub mod error_handler;
pub mod events;
pub mod metadata;
pub mod orchestrator;
pub mod walk;

pub use context::RunState;
pub use error_handler::contain_recoverable;
pub use events::{CancelToken, ScanEvent, create_event_channel};
pub use metadata::{FileSystem, LocalFs};
pub use orchestrator::{close_and_report, run_scan};
pub use walk::{TraversalEngine, WalkOutcome};
