use crate::Config;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from the config.
///
/// `RUST_LOG` takes precedence when set; otherwise the configured log
/// level is used, forced to debug when debug mode is on. Safe to call
/// more than once.
pub fn init_logging(config: &Config) {
    let level: tracing::Level = if config.debug {
        tracing::Level::DEBUG
    } else {
        config.log_level.into()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
