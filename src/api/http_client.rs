use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Transport-level failures.
///
/// Every way a request can fail below the HTTP semantic layer ends up here;
/// nothing else escapes an [`HttpClient`] implementation.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// Network-level error (DNS, connection, TLS, interrupted body, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The transport produced something other than an HTTP response
    #[error("Unexpected response representation")]
    InvalidRepresentation,
    /// Response body exceeded the configured size limit
    #[error("Response too large (exceeds {limit} bytes)")]
    ResponseTooLarge { limit: usize },
    /// Adapter constructed outside of a Tokio runtime
    #[error("No async runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Status, final URL and headers of a received HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub url: Url,
    pub headers: HeaderMap,
}

impl HttpResponse {
    pub fn new(status: StatusCode, url: Url) -> Self {
        Self {
            status,
            url,
            headers: HeaderMap::new(),
        }
    }
}

/// Outcome of one GET, before any domain validation.
#[derive(Debug)]
pub enum HttpClientResult {
    /// An HTTP response arrived. `body` is empty when the server sent none.
    Success { body: Vec<u8>, response: HttpResponse },
    Failure(HttpClientError),
}

/// Single-shot continuation handed to [`HttpClient::get`].
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Performs a GET against a URL and reports the outcome asynchronously.
///
/// Implementations invoke `completion` at most once per call and may do so
/// from any thread. There is no cancellation: once issued, the request runs
/// to completion or failure.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}
