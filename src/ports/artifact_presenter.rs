//! Artifact Presenter Port - hands a document artifact to the user.
//!
//! The pipeline never calls a presenter directly; it only writes to the
//! `ArtifactStore`. Handlers and the `PipelineObserver` bridge read from the
//! store and present.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::cancellation::DocumentArtifact;
use crate::domain::foundation::Timestamp;

/// Filename offered for downloads when the caller gives none.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "kuendigung.pdf";

/// Port for download/preview of generated documents.
#[async_trait]
pub trait ArtifactPresenter: Send + Sync {
    /// Offer the document as a file with the given name.
    async fn download(
        &self,
        artifact: &DocumentArtifact,
        filename: &str,
    ) -> Result<PresentedArtifact, PresentationError>;

    /// Open the document for viewing.
    ///
    /// The returned handle is only valid until `expires_at`.
    async fn preview(&self, artifact: &DocumentArtifact)
        -> Result<PresentedArtifact, PresentationError>;
}

/// Where a presented document can be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedArtifact {
    /// Location of the presented copy.
    pub location: PathBuf,
    /// Name the user sees.
    pub filename: String,
    /// End of the validity window, for previews.
    pub expires_at: Option<Timestamp>,
}

/// Presentation failed. Never affects the artifact store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error("no document artifact available")]
    NoArtifact,

    #[error("presentation blocked: {0}")]
    Blocked(String),

    #[error("presentation I/O failed: {0}")]
    Io(String),
}

impl PresentationError {
    /// The general action named to the user when presentation fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            PresentationError::NoArtifact => "no cancellation document has been generated yet",
            PresentationError::Blocked(_) | PresentationError::Io(_) => {
                "could not open the cancellation document"
            }
        }
    }
}
