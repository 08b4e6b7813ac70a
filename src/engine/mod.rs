//! Engine module: run controller, CLI handling and console progress

pub mod arg_parser;
pub mod cli;
pub mod controller;
pub mod progress;
pub mod tools;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use cli::{CliOpts, handle_run};
pub use controller::{RunHandle, Scanner};
pub use tools::resolve_root;
