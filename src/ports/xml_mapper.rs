//! XML Mapper Port - Stage 2 of the pipeline.
//!
//! Maps the generated document plus the structured customer and policy data
//! onto the insurer's BiPRO template.

use async_trait::async_trait;

use crate::domain::cancellation::{Customer, DocumentArtifact, Policy};

use super::DownstreamError;

/// Port for the BiPRO XML mapping service.
#[async_trait]
pub trait CancellationXmlMapper: Send + Sync {
    /// Map a document of the current run to BiPRO XML.
    ///
    /// `document` must be the artifact produced by Stage 1 of the same run.
    async fn map_to_xml(
        &self,
        customer: &Customer,
        policy: &Policy,
        document: &DocumentArtifact,
    ) -> Result<String, DownstreamError>;
}
