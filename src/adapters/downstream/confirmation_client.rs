//! HTTP adapter for the confirmation receiver (Stage 3).
//!
//! `POST {base}/cancellation-confirm` with the XML as the raw body.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::http_support::{build_client, ensure_success, read_text, transport_error, EndpointConfig};
use crate::ports::{ConfirmationReceiver, DownstreamError};

const CONFIRM_PATH: &str = "/cancellation-confirm";

/// Reqwest implementation of `ConfirmationReceiver`.
pub struct HttpConfirmationReceiver {
    config: EndpointConfig,
    client: Client,
}

impl HttpConfirmationReceiver {
    /// Creates the adapter and its HTTP client.
    pub fn new(config: EndpointConfig) -> Result<Self, DownstreamError> {
        let client = build_client(&config)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl ConfirmationReceiver for HttpConfirmationReceiver {
    async fn submit_for_confirmation(
        &self,
        structured_text: &str,
    ) -> Result<String, DownstreamError> {
        let url = self.config.url(CONFIRM_PATH);
        tracing::debug!(%url, xml_chars = structured_text.len(), "Submitting cancellation");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/xml")
            .body(structured_text.to_owned())
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;
        let response = ensure_success(response).await?;

        read_text(response, self.config.timeout).await
    }
}
