//! Cancellation Document Generator Port - Stage 1 of the pipeline.
//!
//! Turns a customer and policy into the cancellation letter. The document is
//! opaque to this crate: adapters only guarantee that a non-empty binary body
//! came back.

use async_trait::async_trait;

use crate::domain::cancellation::{Customer, Policy};

use super::DownstreamError;

/// Port for the document generation service.
///
/// # Contract
///
/// Implementations must:
/// - Send one request per call and never retry
/// - Return the response body unchanged on success
/// - Report transport failures and shape mismatches as `DownstreamError`
#[async_trait]
pub trait CancellationDocumentGenerator: Send + Sync {
    /// Request a cancellation document for the given subject.
    async fn generate_document(
        &self,
        customer: &Customer,
        policy: &Policy,
    ) -> Result<Vec<u8>, DownstreamError>;
}
