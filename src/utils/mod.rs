pub mod config;
pub mod dirlog_toml;
pub mod logger;

pub use config::*;
pub use logger::{Colors, setup_logging};
