//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays clean. The filter is
//! read from `TODOS_LOG` (EnvFilter syntax, e.g. `todo_core=debug`) and falls
//! back to the configured default level.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TODOS_LOG";

/// Builds the filter from `TODOS_LOG`, or from `default_level` when unset or invalid.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global fmt subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
