//! Tracing setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever embeds it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise the global subscriber.
///
/// Reads `RUST_LOG`, defaulting to `info`.  Output goes to stderr in the
/// compact format.
///
/// ```bash
/// RUST_LOG=feedsync=debug feedsync https://example.com/feed
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
