//! Loads the feed from a fixed URL through an injected [`HttpClient`].

use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use super::feed_items_mapper::FeedItemsMapper;
use super::remote_feed_item::RemoteFeedItem;
use super::{HttpClient, HttpClientResult};
use crate::error::FeedLoadError;
use crate::feed::{FeedLoader, LoadFeedCompletion, LoadFeedResult};
use crate::liveness::Liveness;

/// Issues one GET per [`load`](Self::load) and reports a domain result.
///
/// Requests are never shared or deduplicated.  If the loader is dropped
/// before the transport answers, the completion is silently skipped; the
/// request itself still runs to completion inside the client.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    liveness: Liveness,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            liveness: Liveness::new(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request the feed.  `completion` fires at most once, and exactly once
    /// while this loader is alive.
    pub fn load(&self, completion: impl FnOnce(LoadFeedResult) + Send + 'static) {
        let watch = self.liveness.watch();
        debug!(url = %self.url, "requesting feed");

        self.client.get(
            &self.url,
            Box::new(move |result| {
                if !watch.is_alive() {
                    debug!("feed loader released before response, dropping result");
                    return;
                }
                completion(Self::map(result));
            }),
        );
    }

    fn map(result: HttpClientResult) -> LoadFeedResult {
        let (data, response) = result.map_err(|error| {
            warn!(%error, "feed request failed");
            FeedLoadError::Connectivity
        })?;

        match FeedItemsMapper::map(&data, &response) {
            Ok(items) => Ok(items.into_iter().map(RemoteFeedItem::into_domain).collect()),
            Err(error) => {
                warn!(%error, url = %response.url, "rejected feed payload");
                Err(FeedLoadError::InvalidData)
            }
        }
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: LoadFeedCompletion) {
        RemoteFeedLoader::load(self, completion);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
