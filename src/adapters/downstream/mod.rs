//! Downstream Service Adapters.
//!
//! Implementations of the three downstream ports.
//!
//! ## Available Adapters
//!
//! - `HttpDocumentGenerator` - `POST /cancellation/preview`, JSON in, document out
//! - `HttpXmlMapper` - `POST /pdf-xml`, multipart in, XML out
//! - `HttpConfirmationReceiver` - `POST /cancellation-confirm`, XML in, text out
//! - `MockDocumentGenerator`, `MockXmlMapper`, `MockConfirmationReceiver` - scripted mocks

mod confirmation_client;
mod document_generator_client;
mod http_support;
mod mock_clients;
mod xml_mapper_client;

pub use confirmation_client::HttpConfirmationReceiver;
pub use document_generator_client::HttpDocumentGenerator;
pub use http_support::EndpointConfig;
pub use mock_clients::{
    GenerateDocumentCall, MapToXmlCall, MockConfirmationReceiver, MockDocumentGenerator,
    MockXmlMapper,
};
pub use xml_mapper_client::HttpXmlMapper;
