//! GenerateDocumentHandler - Command handler for document-only generation.
//!
//! Runs Stage 1 alone. The stored document can then be downloaded or
//! previewed explicitly; nothing is opened automatically.

use std::sync::Arc;

use super::StartCancellationCommand;
use crate::application::{CancellationPipeline, PipelineError};
use crate::domain::foundation::Timestamp;

/// Command to generate the cancellation document only.
///
/// Carries the same data as a full cancellation.
pub type GenerateDocumentCommand = StartCancellationCommand;

/// Result of successful document generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateDocumentResult {
    pub generated_at: Timestamp,
    pub size_bytes: usize,
    /// SHA-256 of the payload, hex encoded.
    pub checksum: String,
}

/// Handler for document-only generation.
pub struct GenerateDocumentHandler {
    pipeline: Arc<CancellationPipeline>,
}

impl GenerateDocumentHandler {
    pub fn new(pipeline: Arc<CancellationPipeline>) -> Self {
        Self { pipeline }
    }

    pub async fn handle(
        &self,
        cmd: GenerateDocumentCommand,
    ) -> Result<GenerateDocumentResult, PipelineError> {
        let (customer, policy) = cmd.trimmed();

        let document = self
            .pipeline
            .generate_document_only(customer.as_ref(), policy.as_ref())
            .await?;

        Ok(GenerateDocumentResult {
            generated_at: document.generated_at(),
            size_bytes: document.len(),
            checksum: document.checksum(),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::downstream::{
        MockConfirmationReceiver, MockDocumentGenerator, MockXmlMapper,
    };
    use crate::domain::cancellation::{ArtifactStore, Customer, Policy, Stage};
    use crate::ports::{DownstreamError, PayloadKind};

    fn command() -> GenerateDocumentCommand {
        GenerateDocumentCommand::new(
            Customer::new("Anna", "Muster", "Hauptstr", "1", "12345", "Berlin"),
            Policy::new("P-001", "Hausrat", "2020-01-01", "2025-01-01", "AllSure"),
        )
    }

    #[tokio::test]
    async fn stores_document_without_later_stages() {
        let generator = MockDocumentGenerator::new().with_document(vec![0x25, 0x50, 0x44, 0x46]);
        let mapper = MockXmlMapper::new();
        let receiver = MockConfirmationReceiver::new();
        let store = ArtifactStore::new();
        let pipeline = CancellationPipeline::new(
            store.clone(),
            Arc::new(generator),
            Arc::new(mapper.clone()),
            Arc::new(receiver.clone()),
        );
        let handler = GenerateDocumentHandler::new(Arc::new(pipeline));

        let result = handler.handle(command()).await.unwrap();

        assert_eq!(result.size_bytes, 4);
        assert_eq!(result.checksum.len(), 64);
        assert_eq!(store.document().unwrap().payload(), b"%PDF");
        assert!(!store.has_structured_text());
        assert_eq!(mapper.call_count(), 0);
        assert_eq!(receiver.call_count(), 0);
    }

    #[tokio::test]
    async fn shape_failure_is_a_document_generation_failure() {
        let generator = MockDocumentGenerator::new()
            .with_error(DownstreamError::shape(PayloadKind::Binary, "empty body"));
        let pipeline = CancellationPipeline::new(
            ArtifactStore::new(),
            Arc::new(generator),
            Arc::new(MockXmlMapper::new()),
            Arc::new(MockConfirmationReceiver::new()),
        );
        let handler = GenerateDocumentHandler::new(Arc::new(pipeline));

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err.stage(), Some(Stage::DocumentGeneration));
        assert!(err.downstream().unwrap().is_shape());
    }
}
