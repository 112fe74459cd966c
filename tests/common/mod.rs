//! Shared helpers for integration tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a test-writer subscriber once. Level comes from `RUST_LOG`,
/// defaulting to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
