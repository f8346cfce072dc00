//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Downstream Service Ports
//!
//! - `CancellationDocumentGenerator` - Stage 1, document generation
//! - `CancellationXmlMapper` - Stage 2, BiPRO XML mapping
//! - `ConfirmationReceiver` - Stage 3, confirmation submission
//!
//! ## Presentation Ports
//!
//! - `ArtifactPresenter` - download and preview of the generated document
//! - `PipelineObserver` - notifications from a running pipeline

mod artifact_presenter;
mod confirmation_receiver;
mod document_generator;
mod downstream_error;
mod pipeline_observer;
mod xml_mapper;

pub use artifact_presenter::{
    ArtifactPresenter, PresentationError, PresentedArtifact, DEFAULT_DOWNLOAD_FILENAME,
};
pub use confirmation_receiver::ConfirmationReceiver;
pub use document_generator::CancellationDocumentGenerator;
pub use downstream_error::{DownstreamError, DownstreamErrorKind, PayloadKind};
pub use pipeline_observer::PipelineObserver;
pub use xml_mapper::CancellationXmlMapper;
