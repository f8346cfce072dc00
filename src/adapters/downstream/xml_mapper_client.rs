//! HTTP adapter for the BiPRO XML mapping service (Stage 2).
//!
//! `POST {base}/pdf-xml` as `multipart/form-data` with three parts:
//! `pdf` (the Stage 1 document), `customer` and `policy` (JSON).

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::http_support::{build_client, ensure_success, read_text, transport_error, EndpointConfig};
use crate::domain::cancellation::{Customer, DocumentArtifact, Policy};
use crate::ports::{CancellationXmlMapper, DownstreamError, PayloadKind};

const MAPPING_PATH: &str = "/pdf-xml";

/// Reqwest implementation of `CancellationXmlMapper`.
pub struct HttpXmlMapper {
    config: EndpointConfig,
    client: Client,
}

impl HttpXmlMapper {
    /// Creates the adapter and its HTTP client.
    pub fn new(config: EndpointConfig) -> Result<Self, DownstreamError> {
        let client = build_client(&config)?;
        Ok(Self { config, client })
    }

    fn build_form(
        customer: &Customer,
        policy: &Policy,
        document: &DocumentArtifact,
    ) -> Result<Form, DownstreamError> {
        let customer_json = serde_json::to_string(customer)
            .map_err(|e| DownstreamError::request(format!("failed to encode customer: {}", e)))?;
        let policy_json = serde_json::to_string(policy)
            .map_err(|e| DownstreamError::request(format!("failed to encode policy: {}", e)))?;

        let pdf = Part::bytes(document.payload().to_vec())
            .file_name(policy.document_filename())
            .mime_str("application/pdf");
        let customer_part = Part::text(customer_json).mime_str("application/json");
        let policy_part = Part::text(policy_json).mime_str("application/json");

        match (pdf, customer_part, policy_part) {
            (Ok(pdf), Ok(customer_part), Ok(policy_part)) => Ok(Form::new()
                .part("pdf", pdf)
                .part("customer", customer_part)
                .part("policy", policy_part)),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => Err(DownstreamError::request(
                format!("failed to build multipart body: {}", e),
            )),
        }
    }
}

#[async_trait]
impl CancellationXmlMapper for HttpXmlMapper {
    async fn map_to_xml(
        &self,
        customer: &Customer,
        policy: &Policy,
        document: &DocumentArtifact,
    ) -> Result<String, DownstreamError> {
        let url = self.config.url(MAPPING_PATH);
        tracing::debug!(
            %url,
            document_bytes = document.len(),
            "Requesting BiPRO XML mapping"
        );

        let form = Self::build_form(customer, policy, document)?;
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;
        let response = ensure_success(response).await?;

        let xml = read_text(response, self.config.timeout).await?;
        if xml.trim().is_empty() {
            return Err(DownstreamError::shape(PayloadKind::Text, "empty body"));
        }

        tracing::debug!(xml_chars = xml.len(), "Received BiPRO XML");
        Ok(xml)
    }
}
