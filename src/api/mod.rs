//! Feed API: fetching a feed over HTTP and turning it into [`FeedItem`]s.
//!
//! - [`HttpClient`] - the transport contract the loader depends on
//! - [`ReqwestHttpClient`] - the production transport over `reqwest`
//! - [`RemoteFeedLoader`] - one GET per `load`, status and payload validation
//! - [`feed_items_mapper`] - JSON payload decoding
//!
//! # Example
//!
//! ```ignore
//! use remote_feed::api::{ReqwestHttpClient, RemoteFeedLoader};
//! use remote_feed::feed::load_feed;
//! use std::sync::Arc;
//!
//! let client = Arc::new(ReqwestHttpClient::new(reqwest::Client::new())?);
//! let loader = RemoteFeedLoader::new(url, client);
//! let items = load_feed(&loader).await;
//! ```
//!
//! [`FeedItem`]: crate::feed::FeedItem

pub mod feed_items_mapper;
mod http_client;
#[cfg(test)]
mod http_client_spy;
mod remote_feed_loader;
mod reqwest_client;

pub use feed_items_mapper::FeedItemsMapperError;
pub use http_client::{
    HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse,
};
pub use remote_feed_loader::RemoteFeedLoader;
pub use reqwest_client::{classify, RawResponse, ReqwestHttpClient};
