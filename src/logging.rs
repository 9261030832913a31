//! Logging init: level-tagged, timestamped lines on stderr.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
