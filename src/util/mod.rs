//! Utility functions shared by the binary and configuration.

mod url_validator;

pub use url_validator::{validate_feed_url, UrlValidationError};
