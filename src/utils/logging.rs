//! Logging setup utilities
//!
//! Installs a `tracing` subscriber for binaries and tests that want engine
//! output. The library itself only emits events and never installs a
//! subscriber on its own.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set and falls back to `info`. Safe to call more
/// than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
