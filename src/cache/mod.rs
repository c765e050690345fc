//! Cache half of the pipeline: the [`FeedStore`] capability and the
//! [`LocalFeedLoader`] that saves into it.
//!
//! A save is always delete-then-insert.  Insertion never happens after a
//! failed deletion.
//!
//! ## For contributors — adding a new store
//!
//! Implement [`FeedStore`].  Each method must call its completion exactly
//! once.  The loader does not serialise overlapping saves, so a store that
//! may be shared between concurrent savers should serialise internally the
//! way [`InMemoryFeedStore`] does.

mod in_memory_store;
mod local_feed_item;
mod local_feed_loader;

pub use in_memory_store::{CachedFeed, InMemoryFeedStore};
pub use local_feed_item::LocalFeedItem;
pub use local_feed_loader::{LocalFeedLoader, SaveResult};

use chrono::{DateTime, Utc};

use crate::error::StoreError;

/// Single-shot completion for [`FeedStore::delete_cached_feed`].
pub type DeletionCompletion = Box<dyn FnOnce(Result<(), StoreError>) + Send + 'static>;

/// Single-shot completion for [`FeedStore::insert`].
pub type InsertionCompletion = Box<dyn FnOnce(Result<(), StoreError>) + Send + 'static>;

/// Persistence capability consumed by [`LocalFeedLoader`].
pub trait FeedStore: Send + Sync {
    /// Remove whatever feed is currently cached.
    fn delete_cached_feed(&self, completion: DeletionCompletion);

    /// Store `items` as the cached feed, stamped with `timestamp`.
    fn insert(
        &self,
        items: Vec<LocalFeedItem>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    );
}
