//! Errors detected before a pipeline run is attempted.

use thiserror::Error;

/// Required cancellation input is missing or incomplete.
///
/// Raised before any downstream service is contacted; a run that fails
/// with this error has no side effects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("customer data is missing")]
    MissingCustomer,

    #[error("policy data is missing")]
    MissingPolicy,

    #[error("{entity} field '{field}' must not be empty")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
}

impl PreconditionError {
    /// Creates an empty field error for the given entity.
    pub fn empty_field(entity: &'static str, field: &'static str) -> Self {
        PreconditionError::EmptyField { entity, field }
    }
}
