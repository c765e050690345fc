//! Command-line and environment configuration for the `feedsync` binary.

use std::time::Duration;

use clap::Parser;
use url::Url;

/// Endpoint used when neither the argument nor `FEEDSYNC_URL` is given.
pub const DEFAULT_FEED_URL: &str = "http://localhost:8080/feed";

/// Fetch a JSON feed and keep a local cache of it up to date.
#[derive(Debug, Clone, Parser)]
#[command(name = "feedsync", version, about)]
pub struct Config {
    /// Feed endpoint to poll.
    #[arg(env = "FEEDSYNC_URL", default_value = DEFAULT_FEED_URL)]
    pub url: Url,

    /// Seconds between sync rounds.
    #[arg(long, env = "FEEDSYNC_INTERVAL_SECS", default_value_t = 60)]
    pub interval_secs: u64,

    /// Per-request timeout in seconds.
    #[arg(long, env = "FEEDSYNC_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Run a single round and exit.
    #[arg(long)]
    pub once: bool,
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
