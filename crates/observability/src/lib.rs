//! Tracing/logging setup for the embedding application.
//!
//! The domain crates only emit `tracing` events; the GUI shell decides when
//! (and whether) to install a subscriber by calling [`init`] once at startup.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Idempotent: only the first call installs a subscriber.
pub fn init() {
    tracing::init();
}
