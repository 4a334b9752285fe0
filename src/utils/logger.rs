//! Logger setup for the confmap binary
//! Author: kartik4091
//! Created: 2025-06-05

use tracing::info;
use tracing_subscriber::EnvFilter;

pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Installs a global compact subscriber writing to stderr.
///
/// `RUST_LOG` wins over `level` when set. Returns false if a subscriber was
/// already installed.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("confmap={}", level)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        info!("Logger initialized with level: {}", level);
    }
    installed
}
