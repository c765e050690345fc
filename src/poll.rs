//! Background feed syncing.
//!
//! Runs a tokio task that periodically loads the feed and saves it into the
//! cache, sending one [`PollMsg`] per round over an [`mpsc`] channel.
//!
//! ## For contributors
//!
//! The poller is intentionally simple: one round per tick, load then save,
//! no retries.  A failed round is reported and the next tick starts fresh.
//! [`load_feed`] and [`save_feed`] are the async bridges over the loaders'
//! completion-based APIs; reuse them rather than hand-rolling channels.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{LocalFeedLoader, SaveResult};
use crate::feed::{FeedItem, FeedLoader, LoadFeedResult};

/// Messages sent from the sync task to whoever is listening.
#[derive(Debug, Clone, PartialEq)]
pub enum PollMsg {
    /// The feed was loaded and cached.
    Cached(Vec<FeedItem>),
    /// The round failed with this error description.
    Error(String),
}

/// Await one [`FeedLoader::load`].
///
/// Returns `None` if the loader dropped its completion without calling it.
pub async fn load_feed(loader: &dyn FeedLoader) -> Option<LoadFeedResult> {
    let (tx, rx) = oneshot::channel();
    loader.load(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    rx.await.ok()
}

/// Await one [`LocalFeedLoader::save`].
///
/// Returns `None` if the store dropped a completion without calling it.
pub async fn save_feed(cache: &LocalFeedLoader, items: &[FeedItem]) -> Option<SaveResult> {
    let (tx, rx) = oneshot::channel();
    cache.save(items, move |result| {
        let _ = tx.send(result);
    });
    rx.await.ok()
}

/// Run a single load-then-save round.
pub async fn sync_once(loader: &dyn FeedLoader, cache: &LocalFeedLoader) -> PollMsg {
    let items = match load_feed(loader).await {
        Some(Ok(items)) => items,
        Some(Err(error)) => return PollMsg::Error(format!("load: {error}")),
        None => return PollMsg::Error("load: completion dropped".into()),
    };

    match save_feed(cache, &items).await {
        Some(Ok(())) => PollMsg::Cached(items),
        Some(Err(error)) => PollMsg::Error(format!("save: {error}")),
        None => PollMsg::Error("save: completion dropped".into()),
    }
}

/// Spawn the background sync task on the current tokio runtime.
///
/// The first round runs immediately.  The task stops once the returned
/// receiver is dropped.
pub fn spawn(
    loader: Arc<dyn FeedLoader>,
    cache: Arc<LocalFeedLoader>,
    interval: Duration,
) -> mpsc::Receiver<PollMsg> {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let msg = sync_once(loader.as_ref(), &cache).await;
            if let PollMsg::Cached(items) = &msg {
                info!(count = items.len(), "feed synced");
            }
            // If the receiver is gone nobody is listening; stop syncing.
            if tx.send(msg).await.is_err() {
                debug!("poll receiver dropped, stopping sync task");
                return;
            }
        }
    });

    rx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
