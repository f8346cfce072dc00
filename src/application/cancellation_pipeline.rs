//! CancellationPipeline - the three-stage cancellation workflow.
//!
//! ```text
//! Customer + Policy
//!   -> Stage 1: CancellationDocumentGenerator  -> ArtifactStore (document)
//!   -> Stage 2: CancellationXmlMapper          -> ArtifactStore (structured text)
//!   -> Stage 3: ConfirmationReceiver           -> acknowledgment to caller
//! ```
//!
//! Each stage consumes the value the previous stage returned in the same
//! call, never a value read back from the store. Both slots are cleared
//! when a run starts, so the store only ever holds artifacts of one run.
//! The first failing stage ends the run; artifacts already written by that
//! run stay in the store.
//!
//! # Concurrency
//!
//! At most one run (full or document-only) executes per pipeline at a time.
//! The pipeline owns the only writer path into its `ArtifactStore`, and a
//! `tokio::sync::Mutex` held for the whole run queues concurrent callers.
//! Input validation happens before the lock, so invalid requests never wait.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::cancellation::{
    ArtifactStatus, ArtifactStore, Customer, DocumentArtifact, PipelineState, Policy, PreconditionError, Stage,
};
use crate::domain::foundation::{StateMachine, Timestamp};
use crate::ports::{
    CancellationDocumentGenerator, CancellationXmlMapper, ConfirmationReceiver, DownstreamError,
    PipelineObserver,
};

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationOutcome {
    /// Stage 3 response body, unchanged.
    pub acknowledgment: String,
    /// When the stored document was generated.
    pub document_generated_at: Timestamp,
    /// When the stored BiPRO XML was generated.
    pub structured_text_generated_at: Timestamp,
    /// Store contents as this run left them.
    pub artifacts: ArtifactStatus,
}

/// Why a run did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// Input was missing or incomplete; nothing was sent.
    #[error("precondition failed: {0}")]
    Precondition(#[from] PreconditionError),

    /// A stage failed; later stages did not run.
    #[error("{stage} failed: {source}")]
    Stage {
        stage: Stage,
        source: DownstreamError,
    },
}

impl PipelineError {
    /// The failed stage, if the run got past validation.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::Stage { stage, .. } => Some(*stage),
            PipelineError::Precondition(_) => None,
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, PipelineError::Precondition(_))
    }

    /// The downstream cause of a stage failure.
    pub fn downstream(&self) -> Option<&DownstreamError> {
        match self {
            PipelineError::Stage { source, .. } => Some(source),
            PipelineError::Precondition(_) => None,
        }
    }

    /// The general action named to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::Precondition(_) => "cancellation data is incomplete",
            PipelineError::Stage { stage, .. } => stage.failed_action(),
        }
    }
}

/// Checks presence and completeness of the run inputs.
fn require_subject<'a>(
    customer: Option<&'a Customer>,
    policy: Option<&'a Policy>,
) -> Result<(&'a Customer, &'a Policy), PreconditionError> {
    let customer = customer.ok_or(PreconditionError::MissingCustomer)?;
    let policy = policy.ok_or(PreconditionError::MissingPolicy)?;
    customer.validate()?;
    policy.validate()?;
    Ok((customer, policy))
}

/// State tracking for one invocation.
struct PipelineRun {
    state: PipelineState,
}

impl PipelineRun {
    fn start() -> Self {
        Self {
            state: PipelineState::Idle,
        }
    }

    fn advance(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_transition_to(&next),
            "invalid pipeline transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!(from = ?self.state, to = ?next, "Pipeline state changed");
        self.state = next;
    }

    async fn stage<T, F>(&mut self, stage: Stage, work: F) -> Result<T, PipelineError>
    where
        F: Future<Output = Result<T, DownstreamError>>,
    {
        self.advance(PipelineState::started(stage));
        match work.await {
            Ok(value) => {
                self.advance(PipelineState::succeeded(stage));
                Ok(value)
            }
            Err(source) => {
                self.advance(PipelineState::Failed { stage });
                tracing::error!(%stage, error = %source, "Cancellation stage failed");
                Err(PipelineError::Stage { stage, source })
            }
        }
    }
}

/// Orchestrates the cancellation stages against one `ArtifactStore`.
///
/// # Usage
///
/// ```rust,ignore
/// let pipeline = CancellationPipeline::new(store, generator, mapper, receiver)
///     .with_observer(Arc::new(PreviewOnDocumentReady::new(presenter)));
///
/// let outcome = pipeline.run(Some(&customer), Some(&policy)).await?;
/// println!("{}", outcome.acknowledgment);
/// ```
pub struct CancellationPipeline {
    store: ArtifactStore,
    generator: Arc<dyn CancellationDocumentGenerator>,
    mapper: Arc<dyn CancellationXmlMapper>,
    receiver: Arc<dyn ConfirmationReceiver>,
    observer: Option<Arc<dyn PipelineObserver>>,
    run_lock: Mutex<()>,
}

impl CancellationPipeline {
    pub fn new(
        store: ArtifactStore,
        generator: Arc<dyn CancellationDocumentGenerator>,
        mapper: Arc<dyn CancellationXmlMapper>,
        receiver: Arc<dyn ConfirmationReceiver>,
    ) -> Self {
        Self {
            store,
            generator,
            mapper,
            receiver,
            observer: None,
            run_lock: Mutex::new(()),
        }
    }

    /// Attaches an observer notified when a full run has its document.
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The store this pipeline writes to.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Runs all three stages for one customer and policy.
    ///
    /// # Errors
    ///
    /// - `PipelineError::Precondition` when either input is absent or has a
    ///   blank field; no adapter is called and the store is untouched.
    /// - `PipelineError::Stage` naming the first stage that failed. The store
    ///   then holds only what this run produced before the failure.
    pub async fn run(
        &self,
        customer: Option<&Customer>,
        policy: Option<&Policy>,
    ) -> Result<CancellationOutcome, PipelineError> {
        let (customer, policy) = require_subject(customer, policy)?;
        let _single_flight = self.run_lock.lock().await;

        tracing::info!(policy_number = %policy.policy_number, "Starting cancellation");
        self.store.clear_all();
        let mut run = PipelineRun::start();

        let document = run
            .stage(Stage::DocumentGeneration, self.generate_and_store(customer, policy))
            .await?;

        if let Some(observer) = &self.observer {
            observer.document_ready(&document).await;
        }

        let structured_text = run
            .stage(Stage::Mapping, async {
                let xml = self.mapper.map_to_xml(customer, policy, &document).await?;
                Ok::<_, DownstreamError>(self.store.set_structured_text(xml, Timestamp::now()))
            })
            .await?;

        let acknowledgment = run
            .stage(
                Stage::Confirmation,
                self.receiver
                    .submit_for_confirmation(structured_text.payload()),
            )
            .await?;

        tracing::info!(
            policy_number = %policy.policy_number,
            "Cancellation process completed successfully"
        );

        Ok(CancellationOutcome {
            acknowledgment,
            document_generated_at: document.generated_at(),
            structured_text_generated_at: structured_text.generated_at(),
            artifacts: self.store.snapshot(),
        })
    }

    /// Runs Stage 1 alone and returns the stored document.
    ///
    /// Clears both slots first like `run`, so no older BiPRO XML is left next
    /// to the new document. Observers are not notified, so no preview is
    /// opened.
    pub async fn generate_document_only(
        &self,
        customer: Option<&Customer>,
        policy: Option<&Policy>,
    ) -> Result<DocumentArtifact, PipelineError> {
        let (customer, policy) = require_subject(customer, policy)?;
        let _single_flight = self.run_lock.lock().await;
        self.store.clear_all();

        PipelineRun::start()
            .stage(Stage::DocumentGeneration, self.generate_and_store(customer, policy))
            .await
    }

    async fn generate_and_store(
        &self,
        customer: &Customer,
        policy: &Policy,
    ) -> Result<DocumentArtifact, DownstreamError> {
        let payload = self.generator.generate_document(customer, policy).await?;
        let document = self.store.set_document(payload, Timestamp::now());
        tracing::debug!(
            size_bytes = document.len(),
            checksum = %document.checksum(),
            "Cancellation document stored"
        );
        Ok(document)
    }
}
