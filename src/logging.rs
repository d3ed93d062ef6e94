//! Logging setup for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by urlhost.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see why hosts are rejected:
///   RUST_LOG=urlhost=DEBUG
///
/// Or to follow Punycode fallbacks as well:
///   RUST_LOG=urlhost::host::idna=TRACE
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .without_time()
        .try_init()
        .ok();
}
