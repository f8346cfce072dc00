//! HTTP adapters - REST API implementations.

pub mod cancellation;

pub use cancellation::{cancellation_routes, CancellationHandlers};
