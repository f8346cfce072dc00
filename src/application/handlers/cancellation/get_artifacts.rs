//! GetArtifactsHandler - Query handler for the cached artifacts.

use crate::domain::cancellation::{
    ArtifactStatus, ArtifactStore, DocumentArtifact, StructuredTextArtifact,
};

/// Handler for reading the artifact store.
pub struct GetArtifactsHandler {
    store: ArtifactStore,
}

impl GetArtifactsHandler {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    /// Presence and age of both slots.
    pub fn status(&self) -> ArtifactStatus {
        self.store.snapshot()
    }

    pub fn document(&self) -> Option<DocumentArtifact> {
        self.store.document()
    }

    pub fn structured_text(&self) -> Option<StructuredTextArtifact> {
        self.store.structured_text()
    }
}
