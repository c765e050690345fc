//! Error taxonomy shared by the remote and cache halves of the crate.
//!
//! Every failure is delivered through the completion of the operation that
//! produced it, as one of the values below.  None of them are fatal: callers
//! decide whether to retry, report, or ignore.

use thiserror::Error;

/// Why a feed load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedLoadError {
    /// The transport delivered no response (offline, DNS, timeout, ...).
    #[error("could not reach the feed endpoint")]
    Connectivity,
    /// A response arrived but its status or body was rejected.
    #[error("feed response was not valid")]
    InvalidData,
}

/// Why a cache save failed.  Wraps the error reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// Deleting the previous cache failed; nothing was inserted.
    #[error("cache deletion failed: {0}")]
    Deletion(#[source] StoreError),
    /// Deletion succeeded but inserting the new feed failed.
    #[error("cache insertion failed: {0}")]
    Insertion(#[source] StoreError),
}

impl CacheError {
    /// The store error underneath, regardless of phase.
    pub fn store_error(&self) -> &StoreError {
        match self {
            Self::Deletion(error) | Self::Insertion(error) => error,
        }
    }
}

/// Failure reported by a [`FeedStore`](crate::cache::FeedStore) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("feed store failure: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reported by an [`HttpClient`](crate::api::HttpClient) when no
/// response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
