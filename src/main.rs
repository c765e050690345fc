//! feedsync — keep a local cache of a remote JSON feed up to date.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────────┐  PollMsg   ┌──────────┐
//! │   poll.rs    │ ─────────► │ main.rs  │ ──► tracing
//! │ (tokio task) │  (channel) │  (log)   │
//! └──────────────┘            └──────────┘
//!     │        │
//!     ▼        ▼
//!   api/     cache/
//! ```
//!
//! `main` wires the concrete pieces together: a reqwest transport behind the
//! remote loader, and an in-memory store behind the cache loader.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use mockable::DefaultClock;
use tokio::runtime::Handle;
use tracing::{error, info};

use feedsync::api::{ReqwestHttpClient, RemoteFeedLoader};
use feedsync::cache::{InMemoryFeedStore, LocalFeedLoader};
use feedsync::config::Config;
use feedsync::logging;
use feedsync::poll::{self, PollMsg};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init();

    // -- remote side ---------------------------------------------------------
    let client = ReqwestHttpClient::new(Handle::current(), config.timeout())
        .context("building HTTP client")?;
    let loader = Arc::new(RemoteFeedLoader::new(config.url.clone(), Arc::new(client)));

    // -- cache side ----------------------------------------------------------
    let store = Arc::new(InMemoryFeedStore::new());
    let cache = Arc::new(LocalFeedLoader::new(store.clone(), Arc::new(DefaultClock)));

    info!(url = %loader.url(), "feedsync starting");

    if config.once {
        return match poll::sync_once(loader.as_ref(), &cache).await {
            PollMsg::Cached(items) => {
                info!(count = items.len(), "feed cached");
                Ok(())
            }
            PollMsg::Error(e) => bail!("sync failed: {e}"),
        };
    }

    // -- main loop -----------------------------------------------------------
    let mut rx = poll::spawn(loader, cache, config.interval());

    loop {
        tokio::select! {
            msg = rx.recv() => match msg {
                Some(PollMsg::Cached(_)) => {
                    if let Some(cached) = store.retrieve() {
                        info!(
                            count = cached.items.len(),
                            saved_at = %cached.timestamp,
                            "cache updated"
                        );
                    }
                }
                Some(PollMsg::Error(e)) => error!("{e}"),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
