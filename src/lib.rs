//! feedsync — fetch a JSON item feed, validate it, and cache it locally.
//!
//! ## Architecture overview
//!
//! ```text
//!            load()                  get()
//! caller ──────────► RemoteFeedLoader ──────► HttpClient
//!   ▲                     │   ▲                  │
//!   │  Vec<FeedItem>      │   └─ bytes, status ──┘
//!   │                     ▼
//!   │               FeedItemsMapper (status == 200, JSON schema)
//!   │
//!   │       save()                 delete_cached_feed() / insert()
//!   └──────────────► LocalFeedLoader ──────────────────────────► FeedStore
//! ```
//!
//! * **`feed`** — the validated [`FeedItem`] and the [`FeedLoader`] trait.
//! * **`api`** — transport capability, payload mapper, remote loader, and a
//!   reqwest-backed transport.
//! * **`cache`** — store capability, two-phase save, and an in-memory store.
//! * **`poll`** — async bridges and the periodic sync task.
//! * **`error`** — the error values every completion can carry.
//! * **`liveness`** — tokens that stop callbacks once their loader is gone.
//!
//! Every operation is single-shot and callback based: it returns
//! immediately and delivers exactly one result later, on whichever thread
//! the capability chooses.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod feed;
pub mod liveness;
pub mod logging;
pub mod poll;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{HttpClient, RemoteFeedLoader};
pub use cache::{FeedStore, LocalFeedLoader};
pub use error::{CacheError, FeedLoadError, StoreError, TransportError};
pub use feed::{FeedItem, FeedLoader};
