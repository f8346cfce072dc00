//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and traits that form the vocabulary
//! of the cancellation domain.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
