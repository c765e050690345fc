//! Remote half of the pipeline: transport capability, payload mapping, and
//! the [`RemoteFeedLoader`] that ties them together.
//!
//! ```text
//! RemoteFeedLoader ──get()──► HttpClient ──(bytes, status)──► FeedItemsMapper
//!        ▲                                                          │
//!        └──────────────── Vec<FeedItem> / FeedLoadError ◄──────────┘
//! ```
//!
//! The loader knows nothing about HTTP libraries; [`ReqwestHttpClient`] is one
//! concrete [`HttpClient`], and tests substitute a spy.

mod feed_items_mapper;
mod remote_feed_item;
mod remote_feed_loader;
mod reqwest_client;

pub use feed_items_mapper::OK_200;
pub use remote_feed_loader::RemoteFeedLoader;
pub use reqwest_client::ReqwestHttpClient;

use url::Url;

use crate::error::TransportError;

/// Response metadata delivered alongside the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: Url,
    pub status_code: u16,
}

impl HttpResponse {
    pub fn new(url: Url, status_code: u16) -> Self {
        Self { url, status_code }
    }
}

/// Either a body plus its response metadata, or a transport failure.
pub type HttpClientResult = Result<(Vec<u8>, HttpResponse), TransportError>;

/// Single-shot completion for [`HttpClient::get`].
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Capability to issue one GET request.
///
/// Implementations must invoke `completion` exactly once per call and must
/// not retry on their own.  Any status code counts as a delivered response;
/// judging the status is the caller's job.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}
