//! Vector suites and shared helpers for the hdcrypt integration tests

pub mod vectors;

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    // RUST_LOG=hdcrypt_wallet=trace shows every derivation step
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Install a test-friendly subscriber once per process
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
