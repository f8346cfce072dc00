//! Download and preview of the stored cancellation document.
//!
//! Both handlers read the current document from the `ArtifactStore` and pass
//! it to an `ArtifactPresenter`. Failures never touch the store.

use std::sync::Arc;

use crate::domain::cancellation::ArtifactStore;
use crate::ports::{ArtifactPresenter, PresentationError, PresentedArtifact};

/// Command to download the stored document.
#[derive(Debug, Clone, Default)]
pub struct DownloadDocumentCommand {
    /// Name offered to the user. The configured default when absent.
    pub filename: Option<String>,
}

/// Handler for downloading the stored document.
pub struct DownloadDocumentHandler {
    store: ArtifactStore,
    presenter: Arc<dyn ArtifactPresenter>,
    default_filename: String,
}

impl DownloadDocumentHandler {
    pub fn new(
        store: ArtifactStore,
        presenter: Arc<dyn ArtifactPresenter>,
        default_filename: impl Into<String>,
    ) -> Self {
        Self {
            store,
            presenter,
            default_filename: default_filename.into(),
        }
    }

    /// Name used when a command carries none.
    pub fn default_filename(&self) -> &str {
        &self.default_filename
    }

    pub async fn handle(
        &self,
        cmd: DownloadDocumentCommand,
    ) -> Result<PresentedArtifact, PresentationError> {
        let document = self.store.document().ok_or(PresentationError::NoArtifact)?;

        let filename = cmd
            .filename
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.default_filename);

        self.presenter.download(&document, filename).await
    }
}

/// Handler for previewing the stored document.
pub struct PreviewDocumentHandler {
    store: ArtifactStore,
    presenter: Arc<dyn ArtifactPresenter>,
}

impl PreviewDocumentHandler {
    pub fn new(store: ArtifactStore, presenter: Arc<dyn ArtifactPresenter>) -> Self {
        Self { store, presenter }
    }

    pub async fn handle(&self) -> Result<PresentedArtifact, PresentationError> {
        let document = self.store.document().ok_or(PresentationError::NoArtifact)?;
        self.presenter.preview(&document).await
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::presentation::FileSystemPresenter;
    use crate::domain::foundation::Timestamp;
    use std::time::Duration;
    use tempfile::TempDir;

    fn presenter(dir: &TempDir) -> Arc<dyn ArtifactPresenter> {
        Arc::new(FileSystemPresenter::new(
            dir.path().join("downloads"),
            dir.path().join("previews"),
            Duration::from_secs(60),
        ))
    }

    #[tokio::test]
    async fn download_without_document_is_no_artifact() {
        let dir = TempDir::new().unwrap();
        let handler =
            DownloadDocumentHandler::new(ArtifactStore::new(), presenter(&dir), "kuendigung.pdf");

        let err = handler.handle(DownloadDocumentCommand::default()).await.unwrap_err();

        assert_eq!(err, PresentationError::NoArtifact);
    }

    #[tokio::test]
    async fn download_uses_default_filename_for_blank_name() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new();
        store.set_document(b"%PDF-1.4".to_vec(), Timestamp::now());
        let handler = DownloadDocumentHandler::new(store, presenter(&dir), "kuendigung.pdf");

        let presented = handler
            .handle(DownloadDocumentCommand {
                filename: Some("  ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(presented.filename, "kuendigung.pdf");
        assert_eq!(std::fs::read(&presented.location).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn download_honors_requested_filename() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new();
        store.set_document(b"%PDF-1.4".to_vec(), Timestamp::now());
        let handler = DownloadDocumentHandler::new(store, presenter(&dir), "kuendigung.pdf");

        let presented = handler
            .handle(DownloadDocumentCommand {
                filename: Some("storno_P-001.pdf".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(presented.filename, "storno_P-001.pdf");
    }

    #[tokio::test]
    async fn preview_sets_expiry_and_keeps_store() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new();
        store.set_document(b"%PDF-1.4".to_vec(), Timestamp::now());
        let handler = PreviewDocumentHandler::new(store.clone(), presenter(&dir));

        let presented = handler.handle().await.unwrap();

        assert!(presented.expires_at.is_some());
        assert!(presented.location.exists());
        assert!(store.has_document());
    }

    #[tokio::test]
    async fn preview_without_document_is_no_artifact() {
        let dir = TempDir::new().unwrap();
        let handler = PreviewDocumentHandler::new(ArtifactStore::new(), presenter(&dir));

        assert_eq!(handler.handle().await.unwrap_err(), PresentationError::NoArtifact);
    }
}
