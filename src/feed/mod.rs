//! Feed domain: the [`FeedItem`] type and the [`FeedLoader`] capability.
//!
//! Anything that can produce a list of feed items implements [`FeedLoader`].
//! The remote loader in [`crate::api`] is the implementation shipped here; the
//! sync task in [`crate::poll`] only depends on this trait.
//!
//! ## For contributors — adding a new loader
//!
//! New loaders live inside this crate: [`FeedItem`] has no public
//! constructor, so only crate code can produce the items a loader returns.
//!
//! 1. Add a module (next to [`crate::api`]) and implement [`FeedLoader`].
//!    Build items from validated input through a crate-private conversion,
//!    the way the remote loader does with its wire items.
//! 2. Call the completion exactly once per `load`.
//! 3. If your loader can be dropped while a request is in flight, gate the
//!    completion with a [`Liveness`](crate::liveness::Liveness) token the way
//!    [`RemoteFeedLoader`](crate::api::RemoteFeedLoader) does.

mod feed_item;

pub use feed_item::FeedItem;

use crate::error::FeedLoadError;

/// Outcome of one load: the items in document order, or why there are none.
pub type LoadFeedResult = Result<Vec<FeedItem>, FeedLoadError>;

/// Single-shot completion for [`FeedLoader::load`].
pub type LoadFeedCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

/// A source of feed items.
///
/// `load` returns immediately; the result arrives later on whatever thread
/// the implementation chooses.
pub trait FeedLoader: Send + Sync {
    fn load(&self, completion: LoadFeedCompletion);
}
