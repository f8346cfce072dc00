//! HTTP adapter for the cancellation document service (Stage 1).
//!
//! `POST {base}/cancellation/preview` with a JSON body; the service answers
//! with the rendered document.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::http_support::{
    build_client, content_type, ensure_success, read_bytes, transport_error, EndpointConfig,
};
use crate::domain::cancellation::{Customer, Policy};
use crate::ports::{CancellationDocumentGenerator, DownstreamError, PayloadKind};

const PREVIEW_PATH: &str = "/cancellation/preview";

/// Request body of the preview endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct PreviewRequest {
    customer: PreviewCustomer,
    policy: PreviewPolicy,
}

#[derive(Debug, Serialize)]
struct PreviewCustomer {
    name: String,
    address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreviewPolicy {
    policy_number: String,
    product_name: String,
    end_date: String,
    company_address: String,
}

impl PreviewRequest {
    pub(crate) fn new(customer: &Customer, policy: &Policy) -> Self {
        Self {
            customer: PreviewCustomer {
                name: customer.full_name(),
                address: customer.postal_address(),
            },
            policy: PreviewPolicy {
                policy_number: policy.policy_number.clone(),
                product_name: policy.product_name.clone(),
                end_date: policy.end_date.clone(),
                company_address: policy.insurance_company.clone(),
            },
        }
    }
}

/// Reqwest implementation of `CancellationDocumentGenerator`.
pub struct HttpDocumentGenerator {
    config: EndpointConfig,
    client: Client,
}

impl HttpDocumentGenerator {
    /// Creates the adapter and its HTTP client.
    pub fn new(config: EndpointConfig) -> Result<Self, DownstreamError> {
        let client = build_client(&config)?;
        Ok(Self { config, client })
    }
}

/// Content types that mean the service sent an error page, not a document.
fn is_textual(content_type: &str) -> bool {
    content_type.starts_with("text/") || content_type.starts_with("application/json")
}

#[async_trait]
impl CancellationDocumentGenerator for HttpDocumentGenerator {
    async fn generate_document(
        &self,
        customer: &Customer,
        policy: &Policy,
    ) -> Result<Vec<u8>, DownstreamError> {
        let url = self.config.url(PREVIEW_PATH);
        tracing::debug!(%url, policy_number = %policy.policy_number, "Requesting cancellation document");

        let response = self
            .client
            .post(&url)
            .json(&PreviewRequest::new(customer, policy))
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;
        let response = ensure_success(response).await?;

        if let Some(kind) = content_type(&response).filter(|ct| is_textual(ct)) {
            return Err(DownstreamError::shape(
                PayloadKind::Binary,
                format!("received content type {}", kind),
            ));
        }

        let document = read_bytes(response, self.config.timeout).await?;
        if document.is_empty() {
            return Err(DownstreamError::shape(PayloadKind::Binary, "empty body"));
        }

        tracing::debug!(size_bytes = document.len(), "Received cancellation document");
        Ok(document)
    }
}
