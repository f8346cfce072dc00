//! In-process cache of the most recent pipeline artifacts.
//!
//! The store holds at most one `DocumentArtifact` and one
//! `StructuredTextArtifact`. Writes replace the slot; clears are idempotent.
//! It tracks no provenance: which run wrote a slot is the orchestrator's
//! concern, and the orchestrator serializes runs against a store.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use super::artifact::{DocumentArtifact, StructuredTextArtifact};
use crate::domain::foundation::Timestamp;

/// Cloneable handle to the artifact slots.
///
/// Clones share the same slots. All operations are short, synchronous
/// critical sections and never wait on I/O.
#[derive(Debug, Clone, Default)]
pub struct ArtifactStore {
    inner: Arc<Slots>,
}

#[derive(Debug, Default)]
struct Slots {
    document: RwLock<Option<DocumentArtifact>>,
    structured_text: RwLock<Option<StructuredTextArtifact>>,
}

/// Presence and age of both slots at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactStatus {
    pub has_document: bool,
    pub document_generated_at: Option<Timestamp>,
    pub document_size_bytes: Option<usize>,
    pub has_structured_text: bool,
    pub structured_text_generated_at: Option<Timestamp>,
}

// A panic while holding a slot lock cannot leave an Option half-written,
// so poisoned locks are entered as-is.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the document artifact unconditionally.
    pub fn set_document(&self, payload: Vec<u8>, generated_at: Timestamp) -> DocumentArtifact {
        let artifact = DocumentArtifact::new(payload, generated_at);
        *write(&self.inner.document) = Some(artifact.clone());
        artifact
    }

    pub fn document(&self) -> Option<DocumentArtifact> {
        read(&self.inner.document).clone()
    }

    pub fn has_document(&self) -> bool {
        read(&self.inner.document).is_some()
    }

    /// Replaces the structured-text artifact unconditionally.
    pub fn set_structured_text(
        &self,
        payload: impl Into<String>,
        generated_at: Timestamp,
    ) -> StructuredTextArtifact {
        let artifact = StructuredTextArtifact::new(payload, generated_at);
        *write(&self.inner.structured_text) = Some(artifact.clone());
        artifact
    }

    pub fn structured_text(&self) -> Option<StructuredTextArtifact> {
        read(&self.inner.structured_text).clone()
    }

    pub fn has_structured_text(&self) -> bool {
        read(&self.inner.structured_text).is_some()
    }

    pub fn clear_document(&self) {
        write(&self.inner.document).take();
    }

    pub fn clear_structured_text(&self) {
        write(&self.inner.structured_text).take();
    }

    pub fn clear_all(&self) {
        self.clear_document();
        self.clear_structured_text();
    }

    pub fn snapshot(&self) -> ArtifactStatus {
        let document = read(&self.inner.document);
        let structured_text = read(&self.inner.structured_text);
        ArtifactStatus {
            has_document: document.is_some(),
            document_generated_at: document.as_ref().map(DocumentArtifact::generated_at),
            document_size_bytes: document.as_ref().map(DocumentArtifact::len),
            has_structured_text: structured_text.is_some(),
            structured_text_generated_at: structured_text
                .as_ref()
                .map(StructuredTextArtifact::generated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = ArtifactStore::new();
        assert!(!store.has_document());
        assert!(!store.has_structured_text());
        assert!(store.document().is_none());
        assert!(store.structured_text().is_none());
    }

    #[test]
    fn set_document_replaces_previous_value() {
        let store = ArtifactStore::new();
        store.set_document(vec![1, 2, 3], Timestamp::from_unix_secs(10));
        store.set_document(vec![9], Timestamp::from_unix_secs(20));

        let doc = store.document().unwrap();
        assert_eq!(doc.payload(), &[9]);
        assert_eq!(doc.generated_at(), Timestamp::from_unix_secs(20));
    }

    #[test]
    fn set_structured_text_replaces_previous_value() {
        let store = ArtifactStore::new();
        store.set_structured_text("<a/>", Timestamp::from_unix_secs(10));
        store.set_structured_text("<b/>", Timestamp::from_unix_secs(20));

        assert_eq!(store.structured_text().unwrap().payload(), "<b/>");
    }

    #[test]
    fn clearing_one_kind_leaves_the_other() {
        let store = ArtifactStore::new();
        store.set_document(vec![1], Timestamp::now());
        store.set_structured_text("<xml/>", Timestamp::now());

        store.clear_document();

        assert!(!store.has_document());
        assert!(store.has_structured_text());
    }

    #[test]
    fn clear_is_idempotent() {
        let store = ArtifactStore::new();
        store.clear_document();
        store.clear_structured_text();
        store.clear_all();
        store.clear_all();
        assert!(!store.has_document());
        assert!(!store.has_structured_text());
    }

    #[test]
    fn clear_all_empties_both_slots() {
        let store = ArtifactStore::new();
        store.set_document(vec![1], Timestamp::now());
        store.set_structured_text("<xml/>", Timestamp::now());

        store.clear_all();

        assert!(!store.has_document());
        assert!(!store.has_structured_text());
    }

    #[test]
    fn clones_share_slots() {
        let store = ArtifactStore::new();
        let other = store.clone();
        store.set_document(vec![7], Timestamp::now());
        assert!(other.has_document());
    }

    #[test]
    fn snapshot_reports_presence_and_timestamps() {
        let store = ArtifactStore::new();
        store.set_document(vec![1, 2], Timestamp::from_unix_secs(5));

        let status = store.snapshot();
        assert!(status.has_document);
        assert_eq!(status.document_generated_at, Some(Timestamp::from_unix_secs(5)));
        assert_eq!(status.document_size_bytes, Some(2));
        assert!(!status.has_structured_text);
        assert_eq!(status.structured_text_generated_at, None);
    }
}
