//! Cancellation domain - the subject of a cancellation and its artifacts.
//!
//! - `Customer` / `Policy` - the immutable inputs of a pipeline run
//! - `DocumentArtifact` / `StructuredTextArtifact` - cached stage outputs
//! - `ArtifactStore` - last-write-wins holder of at most one artifact per kind
//! - `Stage` / `PipelineState` - the three-stage run state machine
//! - `PreconditionError` - input problems detected before any stage runs

mod artifact;
mod artifact_store;
mod customer;
mod errors;
mod pipeline_state;
mod policy;

pub use artifact::{DocumentArtifact, StructuredTextArtifact};
pub use artifact_store::{ArtifactStatus, ArtifactStore};
pub use customer::Customer;
pub use errors::PreconditionError;
pub use pipeline_state::{PipelineState, Stage};
pub use policy::Policy;
