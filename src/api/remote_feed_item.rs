//! Wire-format DTOs for the feed payload.
//!
//! The mapper decodes into these first and the loader converts them into
//! [`FeedItem`]s in one pass.  They never leave the crate.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use url::Url;
use uuid::Uuid;

use crate::feed::FeedItem;

#[derive(Debug, Deserialize)]
pub(super) struct RemoteFeedRoot {
    pub(super) items: Vec<RemoteFeedItem>,
}

/// One item as received.  `description` and `location` may be missing or
/// `null`; `id` must be a hyphenated UUID and `image` an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RemoteFeedItem {
    #[serde(deserialize_with = "hyphenated_uuid")]
    pub(crate) id: Uuid,
    pub(crate) description: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) image: Url,
}

/// Length of the 8-4-4-4-12 form.
const HYPHENATED_UUID_LEN: usize = 36;

/// Accept only the 8-4-4-4-12 form; simple, braced and URN ids are rejected.
fn hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(D::Error::custom(format!("id {raw:?} is not a hyphenated UUID")));
    }
    Uuid::parse_str(&raw).map_err(D::Error::custom)
}

impl RemoteFeedItem {
    /// `image` becomes `image_url`; nothing else changes.
    pub(crate) fn into_domain(self) -> FeedItem {
        FeedItem::new(self.id, self.description, self.location, self.image)
    }
}
