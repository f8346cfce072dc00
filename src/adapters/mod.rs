//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `downstream` - HTTP clients and mocks for the three cancellation services
//! - `presentation` - local-disk download and preview of the document
//! - `http` - inbound REST API

pub mod downstream;
pub mod http;
pub mod presentation;

pub use downstream::{
    EndpointConfig, HttpConfirmationReceiver, HttpDocumentGenerator, HttpXmlMapper,
};
pub use http::{cancellation_routes, CancellationHandlers};
pub use presentation::{FileSystemPresenter, PreviewOnDocumentReady};
