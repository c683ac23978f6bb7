//! Feed feature: the domain model and the loader contract.
//!
//! - [`FeedItem`] - one entry of a feed, compared by value
//! - [`FeedLoader`] - callback-based contract for producing a feed
//! - [`load_feed`] - awaits a single `load` through a oneshot channel
//!
//! # Example
//!
//! ```ignore
//! use remote_feed::feed::{load_feed, FeedLoadError};
//!
//! match load_feed(&loader).await {
//!     Some(Ok(items)) => println!("{} items", items.len()),
//!     Some(Err(FeedLoadError::Connectivity)) => eprintln!("offline?"),
//!     Some(Err(FeedLoadError::InvalidData)) => eprintln!("bad payload"),
//!     None => {}
//! }
//! ```

mod feed_item;
mod loader;

pub use feed_item::FeedItem;
pub use loader::{load_feed, FeedLoadError, FeedLoader, LoadFeedCompletion, LoadFeedResult};
