use super::FeedItem;
use thiserror::Error;
use tokio::sync::oneshot;

/// Why a feed could not be loaded.
///
/// Callers only ever see these two classes; transport and decoding details
/// are logged where they occur and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedLoadError {
    /// The request never produced a usable HTTP response
    #[error("Could not connect to the feed server")]
    Connectivity,
    /// The server answered, but not with status 200 and a valid feed payload
    #[error("The feed server returned invalid data")]
    InvalidData,
}

/// Outcome of a single `load`: the items in payload order, or why it failed.
pub type LoadFeedResult = Result<Vec<FeedItem>, FeedLoadError>;

/// Single-shot continuation handed to [`FeedLoader::load`].
pub type LoadFeedCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

/// Something that can produce a feed.
///
/// `load` returns immediately. The completion is invoked at most once, from
/// whatever execution context the implementation uses; callers must not
/// assume it runs on the calling thread or before `load` returns.
pub trait FeedLoader: Send + Sync {
    fn load(&self, completion: LoadFeedCompletion);
}

/// Awaits one `load` through a oneshot channel.
///
/// Returns `None` when the loader dropped the completion without invoking
/// it, e.g. because the result was discarded after the loader went away.
pub async fn load_feed<L: FeedLoader + ?Sized>(loader: &L) -> Option<LoadFeedResult> {
    let (tx, rx) = oneshot::channel();
    loader.load(Box::new(move |result| {
        // Receiver gone means the caller stopped waiting
        let _ = tx.send(result);
    }));
    rx.await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use uuid::Uuid;

    struct StaticLoader(LoadFeedResult);

    impl FeedLoader for StaticLoader {
        fn load(&self, completion: LoadFeedCompletion) {
            let result = self.0.clone();
            std::thread::spawn(move || completion(result));
        }
    }

    struct SilentLoader;

    impl FeedLoader for SilentLoader {
        fn load(&self, completion: LoadFeedCompletion) {
            drop(completion);
        }
    }

    #[tokio::test]
    async fn test_load_feed_returns_delivered_items() {
        let item = FeedItem::new(
            Uuid::new_v4(),
            None,
            None,
            Url::parse("https://a-url.com").unwrap(),
        );
        let loader = StaticLoader(Ok(vec![item.clone()]));

        let result = load_feed(&loader).await;
        assert_eq!(result, Some(Ok(vec![item])));
    }

    #[tokio::test]
    async fn test_load_feed_returns_delivered_error() {
        let loader = StaticLoader(Err(FeedLoadError::Connectivity));
        let result = load_feed(&loader).await;
        assert_eq!(result, Some(Err(FeedLoadError::Connectivity)));
    }

    #[tokio::test]
    async fn test_load_feed_returns_none_when_completion_dropped() {
        assert_eq!(load_feed(&SilentLoader).await, None);
    }

    #[test]
    fn test_error_messages() {
        assert!(FeedLoadError::Connectivity.to_string().contains("connect"));
        assert!(FeedLoadError::InvalidData.to_string().contains("invalid data"));
    }
}
