//! Filesystem Presenter - Implementation of ArtifactPresenter.
//!
//! Downloads are written to a download directory under the requested name.
//! Previews are written to a preview directory under a unique name and
//! removed again once the validity window has passed.
//!
//! # Directory Structure
//!
//! ```text
//! {download_dir}/
//! └── kuendigung.pdf
//! {preview_dir}/
//! └── preview_5f0c...e1.pdf   (deleted after preview_ttl)
//! ```
//!
//! Writes go to a uniquely named `{name}.{uuid}.tmp` first and are renamed into place, so a reader
//! never sees a partially written document.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use uuid::Uuid;

use crate::domain::cancellation::DocumentArtifact;
use crate::domain::foundation::Timestamp;
use crate::ports::{
    ArtifactPresenter, PresentationError, PresentedArtifact, DEFAULT_DOWNLOAD_FILENAME,
};

/// Local filesystem presenter for cancellation documents.
#[derive(Debug, Clone)]
pub struct FileSystemPresenter {
    download_dir: PathBuf,
    preview_dir: PathBuf,
    preview_ttl: Duration,
}

impl FileSystemPresenter {
    /// Creates a presenter writing into the given directories.
    pub fn new(
        download_dir: impl Into<PathBuf>,
        preview_dir: impl Into<PathBuf>,
        preview_ttl: Duration,
    ) -> Self {
        Self {
            download_dir: download_dir.into(),
            preview_dir: preview_dir.into(),
            preview_ttl,
        }
    }

    /// Reduces a user-supplied filename to a single safe path component.
    ///
    /// Falls back to `kuendigung.pdf` when nothing usable remains.
    pub fn sanitize_filename(filename: &str) -> String {
        let name = filename
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or_default()
            .trim();
        if name.is_empty() || name == "." || name == ".." {
            DEFAULT_DOWNLOAD_FILENAME.to_string()
        } else {
            name.to_string()
        }
    }

    async fn write_atomic(dir: &Path, name: &str, payload: &[u8]) -> Result<PathBuf, PresentationError> {
        fs::create_dir_all(dir).await.map_err(|e| {
            PresentationError::Io(format!("failed to create {}: {}", dir.display(), e))
        })?;

        let target = dir.join(name);
        let temp = dir.join(format!("{}.{}.tmp", name, Uuid::new_v4().simple()));

        fs::write(&temp, payload).await.map_err(|e| {
            PresentationError::Io(format!("failed to write {}: {}", temp.display(), e))
        })?;
        fs::rename(&temp, &target).await.map_err(|e| {
            PresentationError::Io(format!("failed to move {} into place: {}", target.display(), e))
        })?;

        Ok(target)
    }

    fn schedule_removal(&self, path: PathBuf) {
        let ttl = self.preview_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            match fs::remove_file(&path).await {
                Ok(()) => tracing::debug!(path = %path.display(), "Preview expired"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to remove expired preview")
                }
            }
        });
    }
}

#[async_trait]
impl ArtifactPresenter for FileSystemPresenter {
    async fn download(
        &self,
        artifact: &DocumentArtifact,
        filename: &str,
    ) -> Result<PresentedArtifact, PresentationError> {
        let filename = Self::sanitize_filename(filename);
        let location = Self::write_atomic(&self.download_dir, &filename, artifact.payload()).await?;

        tracing::info!(
            path = %location.display(),
            size_bytes = artifact.len(),
            "Cancellation document downloaded"
        );

        Ok(PresentedArtifact {
            location,
            filename,
            expires_at: None,
        })
    }

    async fn preview(
        &self,
        artifact: &DocumentArtifact,
    ) -> Result<PresentedArtifact, PresentationError> {
        let expires_at = Timestamp::now()
            .plus_secs(self.preview_ttl.as_secs())
            .ok_or_else(|| {
                PresentationError::Blocked(format!(
                    "preview validity of {}s is out of range",
                    self.preview_ttl.as_secs()
                ))
            })?;
        let filename = format!("preview_{}.pdf", Uuid::new_v4().simple());
        let location = Self::write_atomic(&self.preview_dir, &filename, artifact.payload()).await?;

        self.schedule_removal(location.clone());
        tracing::info!(
            path = %location.display(),
            %expires_at,
            "Cancellation document preview opened"
        );

        Ok(PresentedArtifact {
            location,
            filename,
            expires_at: Some(expires_at),
        })
    }
}
