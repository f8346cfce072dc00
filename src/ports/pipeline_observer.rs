//! Pipeline Observer Port - notifications out of a running pipeline.

use async_trait::async_trait;

use crate::domain::cancellation::DocumentArtifact;

/// Receives notifications from `CancellationPipeline::run`.
///
/// Observers cannot fail a run; they handle their own errors.
#[async_trait]
pub trait PipelineObserver: Send + Sync {
    /// Stage 1 of a full run produced and stored a document.
    async fn document_ready(&self, document: &DocumentArtifact);
}
