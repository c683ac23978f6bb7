use super::feed_items_mapper;
use super::{HttpClient, HttpClientResult};
use crate::feed::{FeedLoadError, FeedLoader, LoadFeedCompletion, LoadFeedResult};
use reqwest::StatusCode;
use std::sync::{Arc, Weak};
use url::Url;

/// Loads a feed from a fixed URL through an [`HttpClient`].
///
/// Each `load` issues exactly one GET and delivers exactly one result, unless
/// the loader is dropped before the response arrives: results for a dropped
/// loader are discarded. The in-flight request itself is not cancelled.
pub struct RemoteFeedLoader<C: ?Sized> {
    url: Url,
    client: Arc<C>,
    // Only the loader holds a strong reference; pending completions hold a
    // `Weak` and deliver only while it can still be upgraded.
    liveness: Arc<()>,
}

impl<C: HttpClient + ?Sized> RemoteFeedLoader<C> {
    /// Creates a loader. No request is made until [`FeedLoader::load`].
    pub fn new(url: Url, client: Arc<C>) -> Self {
        Self {
            url,
            client,
            liveness: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl<C: HttpClient + ?Sized> FeedLoader for RemoteFeedLoader<C> {
    fn load(&self, completion: LoadFeedCompletion) {
        let liveness: Weak<()> = Arc::downgrade(&self.liveness);
        let url = self.url.clone();

        self.client.get(
            &self.url,
            Box::new(move |result| {
                // Held for the duration of delivery
                let Some(_alive) = liveness.upgrade() else {
                    tracing::debug!(url = %url, "Loader dropped before response, discarding result");
                    return;
                };
                completion(map_result(&url, result));
            }),
        );
    }
}

fn map_result(url: &Url, result: HttpClientResult) -> LoadFeedResult {
    match result {
        HttpClientResult::Failure(e) => {
            tracing::warn!(url = %url, error = %e, "Feed request failed");
            Err(FeedLoadError::Connectivity)
        }
        HttpClientResult::Success { response, .. } if response.status != StatusCode::OK => {
            tracing::warn!(url = %url, status = %response.status, "Feed request returned non-200 status");
            Err(FeedLoadError::InvalidData)
        }
        HttpClientResult::Success { body, .. } => match feed_items_mapper::map(&body) {
            Ok(items) => {
                tracing::debug!(url = %url, items = items.len(), "Feed loaded");
                Ok(items)
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Feed payload rejected");
                Err(FeedLoadError::InvalidData)
            }
        },
    }
}
