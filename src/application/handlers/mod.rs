//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cancellation;

pub use cancellation::{
    ClearArtifactsCommand, ClearArtifactsHandler, ClearTarget, DownloadDocumentCommand,
    DownloadDocumentHandler, GenerateDocumentCommand, GenerateDocumentHandler,
    GenerateDocumentResult, GetArtifactsHandler, PreviewDocumentHandler,
    StartCancellationCommand, StartCancellationHandler, StartCancellationResult,
};
