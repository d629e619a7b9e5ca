//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "TILEGRID_LOG";

/// Default filter when `TILEGRID_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs a formatted subscriber that writes to stderr.
///
/// Stdout is reserved for command output (tables, JSON). Calling this more
/// than once is harmless; later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
