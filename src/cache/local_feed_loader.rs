//! Two-phase save of a feed into a [`FeedStore`].
//!
//! ```text
//! save ──► delete ──err──► Failed(Deletion)
//!             │
//!             ok
//!             ▼
//!          insert ──err──► Failed(Insertion)
//!             │
//!             ok ────────► Completed
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{debug, warn};

use super::{FeedStore, LocalFeedItem};
use crate::error::CacheError;
use crate::feed::FeedItem;
use crate::liveness::{Liveness, LivenessWatch};

/// Terminal outcome of one [`LocalFeedLoader::save`].
pub type SaveResult = Result<(), CacheError>;

/// Saves feeds into a store using delete-then-insert.
///
/// Overlapping saves against one store are not serialised here.  Callers
/// should not run them concurrently unless the store serialises itself.
pub struct LocalFeedLoader {
    store: Arc<dyn FeedStore>,
    clock: Arc<dyn Clock + Send + Sync>,
    liveness: Liveness,
}

impl LocalFeedLoader {
    pub fn new(store: Arc<dyn FeedStore>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            store,
            clock,
            liveness: Liveness::new(),
        }
    }

    /// Replace the cached feed with `items`.
    ///
    /// The timestamp is read from the clock now, not when the insert runs.
    /// `completion` fires at most once, and never after this loader has been
    /// dropped.
    pub fn save(&self, items: &[FeedItem], completion: impl FnOnce(SaveResult) + Send + 'static) {
        let timestamp = self.clock.utc();
        let items: Vec<LocalFeedItem> = items.iter().map(LocalFeedItem::from).collect();
        let store = Arc::downgrade(&self.store);
        let watch = self.liveness.watch();
        debug!(count = items.len(), %timestamp, "saving feed to cache");

        self.store.delete_cached_feed(Box::new(move |deletion| {
            if !watch.is_alive() {
                debug!("cache loader released before deletion finished");
                return;
            }
            if let Err(error) = deletion {
                warn!(%error, "cache deletion failed");
                completion(Err(CacheError::Deletion(error)));
                return;
            }
            let Some(store) = store.upgrade() else {
                debug!("feed store released before insertion");
                return;
            };
            Self::insert(store.as_ref(), items, timestamp, watch, completion);
        }));
    }

    fn insert(
        store: &dyn FeedStore,
        items: Vec<LocalFeedItem>,
        timestamp: DateTime<Utc>,
        watch: LivenessWatch,
        completion: impl FnOnce(SaveResult) + Send + 'static,
    ) {
        store.insert(
            items,
            timestamp,
            Box::new(move |insertion| {
                if !watch.is_alive() {
                    debug!("cache loader released before insertion finished");
                    return;
                }
                if let Err(error) = &insertion {
                    warn!(%error, "cache insertion failed");
                }
                completion(insertion.map_err(CacheError::Insertion));
            }),
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeDelta;

    use super::*;
    use crate::error::StoreError;
    use crate::test_support::{
        fixture_timestamp, make_item, FeedStoreSpy, MutableClock, StoreMessage,
    };

    struct Sut {
        loader: LocalFeedLoader,
        store: Arc<FeedStoreSpy>,
        clock: Arc<MutableClock>,
    }

    fn make_sut() -> Sut {
        let store = Arc::new(FeedStoreSpy::default());
        let clock = Arc::new(MutableClock::new(fixture_timestamp()));
        let loader = LocalFeedLoader::new(store.clone(), clock.clone());
        Sut {
            loader,
            store,
            clock,
        }
    }

    fn two_items() -> Vec<FeedItem> {
        vec![make_item(None, None).0, make_item(Some("d"), Some("l")).0]
    }

    fn locals(items: &[FeedItem]) -> Vec<LocalFeedItem> {
        items.iter().map(LocalFeedItem::from).collect()
    }

    /// Run `save`, let `action` drive the spy, and return every delivered result.
    fn results_after(loader: &LocalFeedLoader, action: impl FnOnce()) -> Vec<SaveResult> {
        let captured = Arc::new(Mutex::new(Vec::<SaveResult>::new()));
        let sink = Arc::clone(&captured);
        loader.save(&two_items(), move |result| sink.lock().unwrap().push(result));

        action();

        let results = captured.lock().unwrap().clone();
        results
    }

    #[test]
    fn init_does_not_message_store() {
        let sut = make_sut();

        assert!(sut.store.messages().is_empty());
    }

    #[test]
    fn save_requests_deletion() {
        let sut = make_sut();

        sut.loader.save(&two_items(), |_| {});

        assert_eq!(sut.store.messages(), vec![StoreMessage::DeleteCachedFeed]);
    }

    #[test]
    fn save_does_not_insert_on_deletion_error() {
        let sut = make_sut();

        sut.loader.save(&two_items(), |_| {});
        sut.store.complete_deletion(Err(StoreError::new("any")), 0);

        assert_eq!(sut.store.messages(), vec![StoreMessage::DeleteCachedFeed]);
    }

    #[test]
    fn save_inserts_with_timestamp_on_deletion_success() {
        let sut = make_sut();
        let items = two_items();

        sut.loader.save(&items, |_| {});
        sut.store.complete_deletion(Ok(()), 0);

        assert_eq!(
            sut.store.messages(),
            vec![
                StoreMessage::DeleteCachedFeed,
                StoreMessage::Insert(locals(&items), fixture_timestamp()),
            ]
        );
    }

    #[test]
    fn timestamp_is_taken_when_save_is_called() {
        let sut = make_sut();
        let items = two_items();

        sut.loader.save(&items, |_| {});
        sut.clock.advance(TimeDelta::minutes(5));
        sut.store.complete_deletion(Ok(()), 0);

        assert_eq!(
            sut.store.messages()[1],
            StoreMessage::Insert(locals(&items), fixture_timestamp())
        );
    }

    #[test]
    fn save_fails_on_deletion_error() {
        let sut = make_sut();
        let error = StoreError::new("deletion");

        let results = results_after(&sut.loader, || {
            sut.store.complete_deletion(Err(error.clone()), 0);
        });

        assert_eq!(results, vec![Err(CacheError::Deletion(error))]);
    }

    #[test]
    fn save_fails_on_insertion_error() {
        let sut = make_sut();
        let error = StoreError::new("insertion");

        let results = results_after(&sut.loader, || {
            sut.store.complete_deletion(Ok(()), 0);
            sut.store.complete_insertion(Err(error.clone()), 0);
        });

        assert_eq!(results, vec![Err(CacheError::Insertion(error))]);
    }

    #[test]
    fn save_succeeds_on_successful_insertion() {
        let sut = make_sut();

        let results = results_after(&sut.loader, || {
            sut.store.complete_deletion(Ok(()), 0);
            sut.store.complete_insertion(Ok(()), 0);
        });

        assert_eq!(results, vec![Ok(())]);
    }

    #[test]
    fn released_loader_does_not_deliver_deletion_error() {
        let Sut { loader, store, .. } = make_sut();
        let captured = Arc::new(Mutex::new(Vec::<SaveResult>::new()));
        let sink = Arc::clone(&captured);

        loader.save(&two_items(), move |result| sink.lock().unwrap().push(result));
        drop(loader);
        store.complete_deletion(Err(StoreError::new("any")), 0);

        assert!(captured.lock().unwrap().is_empty());
    }

    #[test]
    fn released_loader_does_not_insert() {
        let Sut { loader, store, .. } = make_sut();

        loader.save(&two_items(), |_| {});
        drop(loader);
        store.complete_deletion(Ok(()), 0);

        assert_eq!(store.messages(), vec![StoreMessage::DeleteCachedFeed]);
    }

    #[test]
    fn released_loader_does_not_deliver_insertion_error() {
        let Sut { loader, store, .. } = make_sut();
        let captured = Arc::new(Mutex::new(Vec::<SaveResult>::new()));
        let sink = Arc::clone(&captured);

        loader.save(&two_items(), move |result| sink.lock().unwrap().push(result));
        store.complete_deletion(Ok(()), 0);
        drop(loader);
        store.complete_insertion(Err(StoreError::new("any")), 0);

        assert!(captured.lock().unwrap().is_empty());
    }
}
