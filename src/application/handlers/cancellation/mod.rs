//! Cancellation command and query handlers.

mod clear_artifacts;
mod generate_document;
mod get_artifacts;
mod present_document;
mod start_cancellation;

pub use clear_artifacts::{ClearArtifactsCommand, ClearArtifactsHandler, ClearTarget};
pub use generate_document::{
    GenerateDocumentCommand, GenerateDocumentHandler, GenerateDocumentResult,
};
pub use get_artifacts::GetArtifactsHandler;
pub use present_document::{
    DownloadDocumentCommand, DownloadDocumentHandler, PreviewDocumentHandler,
};
pub use start_cancellation::{
    StartCancellationCommand, StartCancellationHandler, StartCancellationResult,
};
