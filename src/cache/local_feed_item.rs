//! Store-facing copy of a feed item.
//!
//! Stores receive `LocalFeedItem`s rather than [`FeedItem`]s so that a store
//! implementation never depends on the domain type's evolution.

use url::Url;
use uuid::Uuid;

use crate::feed::FeedItem;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalFeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

impl From<&FeedItem> for LocalFeedItem {
    fn from(item: &FeedItem) -> Self {
        Self {
            id: item.id(),
            description: item.description().map(String::from),
            location: item.location().map(String::from),
            image_url: item.image_url().clone(),
        }
    }
}
