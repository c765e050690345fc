//! The validated domain representation of one feed entry.
//!
//! `FeedItem` values only come out of the remote loader, after the payload
//! mapper has accepted the wire item they were built from.  There is no public
//! constructor, so every `FeedItem` a caller can hand to the cache has passed
//! validation.

use url::Url;
use uuid::Uuid;

/// A single validated feed entry.
///
/// Equality is structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image_url: Url,
}

impl FeedItem {
    pub(crate) fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn image_url(&self) -> &Url {
        &self.image_url
    }
}
