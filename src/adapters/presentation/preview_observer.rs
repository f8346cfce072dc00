//! Bridges pipeline notifications to the presenter.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::cancellation::DocumentArtifact;
use crate::ports::{ArtifactPresenter, PipelineObserver};

/// Opens a preview as soon as a full run has generated its document.
///
/// Presentation failures are logged and never reach the pipeline.
pub struct PreviewOnDocumentReady {
    presenter: Arc<dyn ArtifactPresenter>,
}

impl PreviewOnDocumentReady {
    pub fn new(presenter: Arc<dyn ArtifactPresenter>) -> Self {
        Self { presenter }
    }
}

#[async_trait]
impl PipelineObserver for PreviewOnDocumentReady {
    async fn document_ready(&self, document: &DocumentArtifact) {
        if let Err(e) = self.presenter.preview(document).await {
            tracing::warn!(error = %e, "{}", e.user_message());
        }
    }
}
