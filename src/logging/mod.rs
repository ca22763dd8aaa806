//! Logging initialization for the viewer binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, taking
/// precedence over the configured default level.
pub const LOG_ENV: &str = "CACHELENS_LOG";

/// Installs the global subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
