//! Daemon shell for flowkit
//!
//! Holds the validated configuration surface and the named flow
//! registry with its start/stop lifecycle. Flow execution itself is
//! delegated to the external orchestration layer.

mod config;
mod daemon;
mod logging;

pub use config::{Config, ConfigBuilder, ConfigError, LogLevel};
pub use daemon::{Flow, FlowDaemon};
pub use logging::init_logging;
