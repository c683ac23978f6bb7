use serde::Serialize;
use url::Url;
use uuid::Uuid;

/// One entry of a remote feed.
///
/// Items are plain values: two items are equal when all four fields are
/// equal. They are produced by decoding a feed payload and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeedItem {
    /// Unique identifier of the entry
    pub id: Uuid,
    /// Free-form description, if the feed provided one
    pub description: Option<String>,
    /// Human-readable location, if the feed provided one
    pub location: Option<String>,
    /// Absolute URL of the entry's image
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
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
}
