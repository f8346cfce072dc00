//! StartCancellationHandler - Command handler for the full cancellation run.
//!
//! Trims the entered data, then runs document generation, BiPRO XML mapping
//! and confirmation submission through the `CancellationPipeline`.

use std::sync::Arc;

use crate::application::{CancellationPipeline, PipelineError};
use crate::domain::cancellation::{ArtifactStatus, Customer, Policy};
use crate::domain::foundation::Timestamp;

/// Command to start a cancellation.
///
/// Both parts are optional so an incomplete submission surfaces as a
/// precondition failure instead of a deserialization error.
#[derive(Debug, Clone, Default)]
pub struct StartCancellationCommand {
    pub customer: Option<Customer>,
    pub policy: Option<Policy>,
}

impl StartCancellationCommand {
    pub fn new(customer: Customer, policy: Policy) -> Self {
        Self {
            customer: Some(customer),
            policy: Some(policy),
        }
    }

    /// Returns the command with every text field trimmed.
    pub(crate) fn trimmed(&self) -> (Option<Customer>, Option<Policy>) {
        (
            self.customer.as_ref().map(Customer::trimmed),
            self.policy.as_ref().map(Policy::trimmed),
        )
    }
}

/// Result of a completed cancellation.
#[derive(Debug, Clone)]
pub struct StartCancellationResult {
    /// Acknowledgment text from the confirmation service.
    pub acknowledgment: String,
    pub document_generated_at: Timestamp,
    pub structured_text_generated_at: Timestamp,
    /// Store contents after the run.
    pub artifacts: ArtifactStatus,
}

/// Handler for the full cancellation run.
///
/// # Usage
///
/// ```rust,ignore
/// let handler = StartCancellationHandler::new(pipeline);
/// let result = handler.handle(StartCancellationCommand::new(customer, policy)).await?;
/// println!("{}", result.acknowledgment);
/// ```
pub struct StartCancellationHandler {
    pipeline: Arc<CancellationPipeline>,
}

impl StartCancellationHandler {
    pub fn new(pipeline: Arc<CancellationPipeline>) -> Self {
        Self { pipeline }
    }

    pub async fn handle(
        &self,
        cmd: StartCancellationCommand,
    ) -> Result<StartCancellationResult, PipelineError> {
        let (customer, policy) = cmd.trimmed();

        let outcome = self
            .pipeline
            .run(customer.as_ref(), policy.as_ref())
            .await?;

        Ok(StartCancellationResult {
            acknowledgment: outcome.acknowledgment,
            document_generated_at: outcome.document_generated_at,
            structured_text_generated_at: outcome.structured_text_generated_at,
            artifacts: outcome.artifacts,
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
    use crate::domain::cancellation::{ArtifactStore, PreconditionError, Stage};
    use crate::ports::DownstreamError;

    struct Fixture {
        generator: MockDocumentGenerator,
        mapper: MockXmlMapper,
        receiver: MockConfirmationReceiver,
        handler: StartCancellationHandler,
    }

    fn fixture(
        generator: MockDocumentGenerator,
        mapper: MockXmlMapper,
        receiver: MockConfirmationReceiver,
    ) -> Fixture {
        let pipeline = CancellationPipeline::new(
            ArtifactStore::new(),
            Arc::new(generator.clone()),
            Arc::new(mapper.clone()),
            Arc::new(receiver.clone()),
        );
        Fixture {
            generator,
            mapper,
            receiver,
            handler: StartCancellationHandler::new(Arc::new(pipeline)),
        }
    }

    fn padded_command() -> StartCancellationCommand {
        StartCancellationCommand::new(
            Customer::new(" Anna ", "Muster", "Hauptstr", "1", "12345", " Berlin"),
            Policy::new("P-001 ", "Hausrat", "2020-01-01", "2025-01-01", "AllSure"),
        )
    }

    #[tokio::test]
    async fn trims_inputs_before_running() {
        let f = fixture(
            MockDocumentGenerator::new(),
            MockXmlMapper::new(),
            MockConfirmationReceiver::new(),
        );

        f.handler.handle(padded_command()).await.unwrap();

        let call = &f.generator.calls()[0];
        assert_eq!(call.customer.first_name, "Anna");
        assert_eq!(call.customer.city, "Berlin");
        assert_eq!(call.policy.policy_number, "P-001");
    }

    #[tokio::test]
    async fn returns_acknowledgment_and_artifact_status() {
        let f = fixture(
            MockDocumentGenerator::new().with_document(vec![0x25, 0x50, 0x44, 0x46]),
            MockXmlMapper::new().with_xml("<xml>ok</xml>"),
            MockConfirmationReceiver::new().with_acknowledgment("CONFIRMED"),
        );

        let result = f.handler.handle(padded_command()).await.unwrap();

        assert_eq!(result.acknowledgment, "CONFIRMED");
        assert!(result.artifacts.has_document);
        assert!(result.artifacts.has_structured_text);
        assert_eq!(result.artifacts.document_size_bytes, Some(4));
    }

    #[tokio::test]
    async fn whitespace_only_field_is_a_precondition_failure() {
        let f = fixture(
            MockDocumentGenerator::new(),
            MockXmlMapper::new(),
            MockConfirmationReceiver::new(),
        );
        let mut cmd = padded_command();
        if let Some(customer) = cmd.customer.as_mut() {
            customer.last_name = "   ".to_string();
        }

        let err = f.handler.handle(cmd).await.unwrap_err();

        assert_eq!(
            err,
            PipelineError::Precondition(PreconditionError::empty_field("customer", "lastName"))
        );
        assert_eq!(f.generator.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_policy_is_a_precondition_failure() {
        let f = fixture(
            MockDocumentGenerator::new(),
            MockXmlMapper::new(),
            MockConfirmationReceiver::new(),
        );
        let cmd = StartCancellationCommand {
            policy: None,
            ..padded_command()
        };

        let err = f.handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, PipelineError::Precondition(PreconditionError::MissingPolicy));
    }

    #[tokio::test]
    async fn artifact_status_belongs_to_the_same_run() {
        let f = fixture(
            MockDocumentGenerator::new()
                .with_document(b"first".to_vec())
                .with_document(b"second".to_vec())
                .with_delay(std::time::Duration::from_millis(20)),
            MockXmlMapper::new(),
            MockConfirmationReceiver::new(),
        );

        let (first, second) = tokio::join!(
            f.handler.handle(padded_command()),
            f.handler.handle(padded_command()),
        );

        for result in [first.unwrap(), second.unwrap()] {
            assert!(result.artifacts.has_document);
            assert!(result.artifacts.has_structured_text);
            assert_eq!(
                result.artifacts.document_generated_at,
                Some(result.document_generated_at)
            );
            assert_eq!(
                result.artifacts.structured_text_generated_at,
                Some(result.structured_text_generated_at)
            );
        }
    }

    #[tokio::test]
    async fn confirmation_failure_propagates_stage() {
        let f = fixture(
            MockDocumentGenerator::new(),
            MockXmlMapper::new(),
            MockConfirmationReceiver::new().with_error(DownstreamError::network("refused")),
        );

        let err = f.handler.handle(padded_command()).await.unwrap_err();

        assert_eq!(err.stage(), Some(Stage::Confirmation));
        assert_eq!(f.mapper.call_count(), 1);
        assert_eq!(f.receiver.call_count(), 1);
    }
}
