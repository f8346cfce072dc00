//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, state machines, errors)
//! - `cancellation` - Customer/policy inputs, artifacts, the artifact store and run states

pub mod cancellation;
pub mod foundation;
