//! ClearArtifactsHandler - Command handler for emptying store slots.

use serde::Deserialize;

use crate::domain::cancellation::{ArtifactStatus, ArtifactStore};

/// Which slots to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearTarget {
    #[default]
    All,
    Document,
    StructuredText,
}

/// Command to clear artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearArtifactsCommand {
    pub target: ClearTarget,
}

/// Handler for clearing artifacts.
pub struct ClearArtifactsHandler {
    store: ArtifactStore,
}

impl ClearArtifactsHandler {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    /// Clears the targeted slots and returns what remains.
    pub fn handle(&self, cmd: ClearArtifactsCommand) -> ArtifactStatus {
        match cmd.target {
            ClearTarget::All => self.store.clear_all(),
            ClearTarget::Document => self.store.clear_document(),
            ClearTarget::StructuredText => self.store.clear_structured_text(),
        }
        tracing::debug!(slots = ?cmd.target, "Artifacts cleared");
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn filled_store() -> ArtifactStore {
        let store = ArtifactStore::new();
        store.set_document(vec![1, 2, 3], Timestamp::now());
        store.set_structured_text("<xml/>", Timestamp::now());
        store
    }

    #[test]
    fn clears_everything_by_default() {
        let handler = ClearArtifactsHandler::new(filled_store());

        let status = handler.handle(ClearArtifactsCommand::default());

        assert!(!status.has_document);
        assert!(!status.has_structured_text);
    }

    #[test]
    fn clears_only_the_document() {
        let handler = ClearArtifactsHandler::new(filled_store());

        let status = handler.handle(ClearArtifactsCommand {
            target: ClearTarget::Document,
        });

        assert!(!status.has_document);
        assert!(status.has_structured_text);
    }

    #[test]
    fn clears_only_the_structured_text() {
        let handler = ClearArtifactsHandler::new(filled_store());

        let status = handler.handle(ClearArtifactsCommand {
            target: ClearTarget::StructuredText,
        });

        assert!(status.has_document);
        assert!(!status.has_structured_text);
    }

    #[test]
    fn clearing_an_empty_store_is_a_no_op() {
        let handler = ClearArtifactsHandler::new(ArtifactStore::new());

        let status = handler.handle(ClearArtifactsCommand::default());

        assert!(!status.has_document);
    }
}
