//! Subscriber setup for the workspace's `tracing` events.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

/// Install the process-wide subscriber: JSON-formatted events with
/// timestamps, filtered by `RUST_LOG` (defaulting to `info`).
///
/// Once a subscriber is installed, later calls change nothing.
pub fn init() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new("info"),
    };

    let _ = tracing_subscriber::fmt()
        .json()
        .with_timer(SystemTime)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
