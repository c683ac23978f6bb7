//! Loads a feed of image items from a remote HTTP endpoint.
//!
//! The [`api`] module holds the transport contract, the `reqwest` adapter and
//! the [`RemoteFeedLoader`]; the [`feed`] module holds the domain model and
//! the [`FeedLoader`] contract that presentation code consumes.

pub mod api;
pub mod config;
pub mod feed;
pub mod util;

pub use api::{HttpClient, RemoteFeedLoader, ReqwestHttpClient};
pub use feed::{load_feed, FeedItem, FeedLoadError, FeedLoader, LoadFeedResult};
