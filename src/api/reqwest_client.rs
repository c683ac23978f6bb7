use super::{HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse};
use futures::StreamExt;
use tokio::runtime::Handle;
use url::Url;

const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024; // 10MB

/// What the transport handed back, before classification.
#[derive(Debug, Clone)]
pub enum RawResponse {
    Http(HttpResponse),
    /// A response from a non-HTTP scheme; never valid for this client
    NonHttp { url: Url },
}

/// Normalizes a raw transport outcome into an [`HttpClientResult`].
///
/// - An error always wins, whatever else arrived with it.
/// - An HTTP response without a body is a success with an empty body.
/// - Anything else (no response, or a non-HTTP one) is
///   [`HttpClientError::InvalidRepresentation`].
pub fn classify(
    data: Option<Vec<u8>>,
    response: Option<RawResponse>,
    error: Option<HttpClientError>,
) -> HttpClientResult {
    match (data, response, error) {
        (_, _, Some(error)) => HttpClientResult::Failure(error),
        (data, Some(RawResponse::Http(response)), None) => HttpClientResult::Success {
            body: data.unwrap_or_default(),
            response,
        },
        _ => HttpClientResult::Failure(HttpClientError::InvalidRepresentation),
    }
}

/// [`HttpClient`] backed by `reqwest`.
///
/// Each `get` runs as its own task on the Tokio runtime captured at
/// construction. Timeouts are whatever the wrapped `reqwest::Client` uses.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    runtime: Handle,
    max_body_bytes: usize,
}

impl ReqwestHttpClient {
    /// Wraps `client`. Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::NoRuntime`] when no runtime is running.
    pub fn new(client: reqwest::Client) -> Result<Self, HttpClientError> {
        Ok(Self {
            client,
            runtime: Handle::try_current()?,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    /// Rejects response bodies larger than `limit` bytes.
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let client = self.client.clone();
        let url = url.clone();
        let limit = self.max_body_bytes;

        self.runtime.spawn(async move {
            let result = perform_get(&client, url, limit).await;
            completion(result);
        });
    }
}

async fn perform_get(client: &reqwest::Client, url: Url, limit: usize) -> HttpClientResult {
    tracing::debug!(url = %url, "HTTP GET start");

    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "HTTP GET failed");
            return classify(None, None, Some(HttpClientError::Network(e)));
        }
    };

    let descriptor = HttpResponse {
        status: response.status(),
        url: response.url().clone(),
        headers: response.headers().clone(),
    };
    tracing::debug!(url = %url, status = %descriptor.status, "HTTP GET response");

    match read_limited_bytes(response, limit).await {
        Ok(bytes) => classify(Some(bytes), Some(RawResponse::Http(descriptor)), None),
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Failed reading body");
            classify(None, Some(RawResponse::Http(descriptor)), Some(e))
        }
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, HttpClientError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(HttpClientError::ResponseTooLarge { limit });
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(HttpClientError::ResponseTooLarge { limit });
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
