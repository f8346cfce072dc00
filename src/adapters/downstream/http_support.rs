//! Shared reqwest plumbing for the downstream cancellation services.
//!
//! Every adapter sends exactly one request per call. Failures are mapped
//! onto `DownstreamError` here so the three adapters classify them the same
//! way.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::ports::{DownstreamError, PayloadKind};

/// Longest response body excerpt kept in a `Status` error.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Location and transport settings of one downstream service.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Service root, e.g. `http://document-service:8080`.
    pub base_url: String,
    /// Per-request timeout imposed by the transport.
    pub timeout: Duration,
}

impl EndpointConfig {
    /// Creates an endpoint with the default 30 second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins the service root with a fixed path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Builds the HTTP client for one endpoint.
pub(crate) fn build_client(config: &EndpointConfig) -> Result<Client, DownstreamError> {
    Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| DownstreamError::request(format!("failed to create HTTP client: {}", e)))
}

/// Maps a reqwest send failure.
pub(crate) fn transport_error(error: reqwest::Error, timeout: Duration) -> DownstreamError {
    if error.is_timeout() {
        DownstreamError::Timeout {
            timeout_secs: timeout.as_secs(),
        }
    } else if error.is_connect() {
        DownstreamError::network(format!("connection failed: {}", error))
    } else {
        DownstreamError::network(error.to_string())
    }
}

/// Passes 2xx responses through and turns everything else into `Status`.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, DownstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DownstreamError::Status {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    })
}

/// Value of the response `Content-Type` header, lowercased.
pub(crate) fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_ascii_lowercase)
}

/// Reads the body as raw bytes.
pub(crate) async fn read_bytes(
    response: Response,
    timeout: Duration,
) -> Result<Vec<u8>, DownstreamError> {
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| transport_error(e, timeout))
}

/// Reads the body and requires it to be UTF-8 text.
pub(crate) async fn read_text(
    response: Response,
    timeout: Duration,
) -> Result<String, DownstreamError> {
    let bytes = read_bytes(response, timeout).await?;
    String::from_utf8(bytes).map_err(|e| {
        DownstreamError::shape(
            PayloadKind::Text,
            format!("body is not valid UTF-8: {}", e.utf8_error()),
        )
    })
}
