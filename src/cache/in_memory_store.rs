//! A [`FeedStore`] that keeps the cached feed in process memory.
//!
//! Useful for the binary and for tests that want a real store rather than a
//! spy.  Every operation takes the same mutex and completes before returning,
//! so concurrent savers cannot interleave inside a single operation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use super::{DeletionCompletion, FeedStore, InsertionCompletion, LocalFeedItem};

/// The single record a store holds: the feed and when it was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFeed {
    pub items: Vec<LocalFeedItem>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct InMemoryFeedStore {
    cache: Mutex<Option<CachedFeed>>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current record, if any.
    pub fn retrieve(&self) -> Option<CachedFeed> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<CachedFeed>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FeedStore for InMemoryFeedStore {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        *self.lock() = None;
        completion(Ok(()));
    }

    fn insert(
        &self,
        items: Vec<LocalFeedItem>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    ) {
        *self.lock() = Some(CachedFeed { items, timestamp });
        completion(Ok(()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
