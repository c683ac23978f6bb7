use crate::feed::FeedItem;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FeedItemsMapperError {
    /// Body is not JSON, or does not match the feed payload schema
    #[error("Invalid feed payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Wire shape of one item. `null` and a missing key both decode to `None`.
#[derive(Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Decodes a feed payload into items, preserving payload order.
///
/// All or nothing: a single item with a malformed `id` or `image` rejects the
/// whole payload.
///
/// # Errors
///
/// Returns [`FeedItemsMapperError::Json`] if the bytes are not valid JSON,
/// `items` is missing or not an array, or any item fails field validation.
pub fn map(data: &[u8]) -> Result<Vec<FeedItem>, FeedItemsMapperError> {
    let root: Root = serde_json::from_slice(data)?;
    Ok(root.items.into_iter().map(FeedItem::from).collect())
}
