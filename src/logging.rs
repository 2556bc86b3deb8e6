//! Logging setup using `tracing-subscriber`.
//!
//! Output always goes to stderr so the RPC server's stdout stays a clean
//! protocol stream. `RUST_LOG` takes precedence over the level passed in.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
