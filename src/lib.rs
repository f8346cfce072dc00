//! BiPRO Cancellation - cancellation artifact pipeline
//!
//! This crate turns the customer and policy data of an insurance contract
//! cancellation into three artifacts: a cancellation document from a
//! document-generation service, a BiPRO XML mapping of that document, and a
//! confirmation acknowledgment. The latest document and XML are cached in an
//! in-memory `ArtifactStore` for download and preview.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
