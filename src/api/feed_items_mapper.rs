//! Pure translation of a raw response into wire items.
//!
//! Validation is fail-fast and ordered: the status code is checked before the
//! body is looked at, so a well-formed body behind a non-200 status is still
//! rejected.

use thiserror::Error;

use super::remote_feed_item::{RemoteFeedItem, RemoteFeedRoot};
use super::HttpResponse;

/// The only status code whose body is considered.
pub const OK_200: u16 = 200;

/// Why a payload was rejected.  The loader reports every variant as
/// [`FeedLoadError::InvalidData`](crate::error::FeedLoadError::InvalidData);
/// the detail only goes to the log.
#[derive(Debug, Error)]
pub(crate) enum MapperError {
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),
    #[error("malformed feed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub(crate) struct FeedItemsMapper;

impl FeedItemsMapper {
    pub(crate) fn map(
        data: &[u8],
        response: &HttpResponse,
    ) -> Result<Vec<RemoteFeedItem>, MapperError> {
        if response.status_code != OK_200 {
            return Err(MapperError::UnexpectedStatus(response.status_code));
        }

        let root: RemoteFeedRoot = serde_json::from_slice(data)?;
        Ok(root.items)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
