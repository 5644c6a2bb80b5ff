//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the interactive binary.
///
/// Diagnostics go to stderr so they never interleave with the prompt.
/// Defaults to `warn`; override via `RUST_LOG`. Safe to call multiple
/// times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .try_init();
}
