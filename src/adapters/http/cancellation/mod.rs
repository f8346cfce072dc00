//! Cancellation HTTP adapter - REST API replacing the data-entry form.
//!
//! Provides endpoints for:
//! - Running the full cancellation or generating the document only
//! - Reading, downloading, previewing and clearing cached artifacts

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::CancellationHandlers;
pub use routes::cancellation_routes;
