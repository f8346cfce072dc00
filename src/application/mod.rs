//! Application layer - Commands, Queries, and Handlers.
//!
//! `CancellationPipeline` runs the three downstream stages; the handlers
//! wrap it and the `ArtifactStore` for the inbound HTTP adapter.

mod cancellation_pipeline;
pub mod handlers;

pub use cancellation_pipeline::{CancellationOutcome, CancellationPipeline, PipelineError};
pub use handlers::{
    ClearArtifactsCommand, ClearArtifactsHandler, ClearTarget, DownloadDocumentCommand,
    DownloadDocumentHandler, GenerateDocumentCommand, GenerateDocumentHandler,
    GenerateDocumentResult, GetArtifactsHandler, PreviewDocumentHandler,
    StartCancellationCommand, StartCancellationHandler, StartCancellationResult,
};
