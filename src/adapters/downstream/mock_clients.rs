//! Mock downstream services for testing.
//!
//! Configurable implementations of the three downstream ports, allowing
//! pipeline tests to run without HTTP.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Error injection
//! - Simulated delays for concurrency testing
//! - Call recording for verification
//!
//! # Example
//!
//! ```ignore
//! let generator = MockDocumentGenerator::new().with_document(vec![0x25, 0x50, 0x44, 0x46]);
//! let mapper = MockXmlMapper::new().with_error(DownstreamError::network("down"));
//!
//! let pipeline = CancellationPipeline::new(store, Arc::new(generator.clone()), ...);
//! assert_eq!(generator.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::cancellation::{Customer, DocumentArtifact, Policy};
use crate::ports::{
    CancellationDocumentGenerator, CancellationXmlMapper, ConfirmationReceiver, DownstreamError,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Queue of scripted results shared by the three mocks.
#[derive(Debug)]
struct Script<T, C> {
    responses: Arc<Mutex<VecDeque<Result<T, DownstreamError>>>>,
    fallback: T,
    delay: Duration,
    calls: Arc<Mutex<Vec<C>>>,
}

impl<T: Clone, C: Clone> Script<T, C> {
    fn new(fallback: T) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn push(&self, response: Result<T, DownstreamError>) {
        lock(&self.responses).push_back(response);
    }

    async fn answer(&self, call: C) -> Result<T, DownstreamError> {
        lock(&self.calls).push(call);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }

    fn calls(&self) -> Vec<C> {
        lock(&self.calls).clone()
    }
}

impl<T: Clone, C> Clone for Script<T, C> {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            fallback: self.fallback.clone(),
            delay: self.delay,
            calls: Arc::clone(&self.calls),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Stage 1
// ════════════════════════════════════════════════════════════════════════════

/// A recorded Stage 1 request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateDocumentCall {
    pub customer: Customer,
    pub policy: Policy,
}

/// Mock document generator.
#[derive(Debug, Clone)]
pub struct MockDocumentGenerator {
    script: Script<Vec<u8>, GenerateDocumentCall>,
}

impl Default for MockDocumentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDocumentGenerator {
    /// Creates a mock that answers with a minimal PDF header by default.
    pub fn new() -> Self {
        Self {
            script: Script::new(b"%PDF-1.4 mock".to_vec()),
        }
    }

    /// Queues a successful document.
    pub fn with_document(self, document: impl Into<Vec<u8>>) -> Self {
        self.script.push(Ok(document.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: DownstreamError) -> Self {
        self.script.push(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.script.delay = delay;
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.script.calls().len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<GenerateDocumentCall> {
        self.script.calls()
    }
}

#[async_trait]
impl CancellationDocumentGenerator for MockDocumentGenerator {
    async fn generate_document(
        &self,
        customer: &Customer,
        policy: &Policy,
    ) -> Result<Vec<u8>, DownstreamError> {
        self.script
            .answer(GenerateDocumentCall {
                customer: customer.clone(),
                policy: policy.clone(),
            })
            .await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Stage 2
// ════════════════════════════════════════════════════════════════════════════

/// A recorded Stage 2 request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapToXmlCall {
    pub customer: Customer,
    pub policy: Policy,
    pub document: Vec<u8>,
}

/// Mock XML mapper.
#[derive(Debug, Clone)]
pub struct MockXmlMapper {
    script: Script<String, MapToXmlCall>,
}

impl Default for MockXmlMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl MockXmlMapper {
    /// Creates a mock that answers with a fixed XML document by default.
    pub fn new() -> Self {
        Self {
            script: Script::new("<Kuendigung/>".to_string()),
        }
    }

    /// Queues a successful XML response.
    pub fn with_xml(self, xml: impl Into<String>) -> Self {
        self.script.push(Ok(xml.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: DownstreamError) -> Self {
        self.script.push(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.script.delay = delay;
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.script.calls().len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<MapToXmlCall> {
        self.script.calls()
    }
}

#[async_trait]
impl CancellationXmlMapper for MockXmlMapper {
    async fn map_to_xml(
        &self,
        customer: &Customer,
        policy: &Policy,
        document: &DocumentArtifact,
    ) -> Result<String, DownstreamError> {
        self.script
            .answer(MapToXmlCall {
                customer: customer.clone(),
                policy: policy.clone(),
                document: document.payload().to_vec(),
            })
            .await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Stage 3
// ════════════════════════════════════════════════════════════════════════════

/// Mock confirmation receiver. Records the submitted XML bodies.
#[derive(Debug, Clone)]
pub struct MockConfirmationReceiver {
    script: Script<String, String>,
}

impl Default for MockConfirmationReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConfirmationReceiver {
    /// Creates a mock that acknowledges with "CONFIRMED" by default.
    pub fn new() -> Self {
        Self {
            script: Script::new("CONFIRMED".to_string()),
        }
    }

    /// Queues a successful acknowledgment.
    pub fn with_acknowledgment(self, ack: impl Into<String>) -> Self {
        self.script.push(Ok(ack.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: DownstreamError) -> Self {
        self.script.push(Err(error));
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.script.calls().len()
    }

    /// Returns the submitted bodies in order.
    pub fn submissions(&self) -> Vec<String> {
        self.script.calls()
    }
}

#[async_trait]
impl ConfirmationReceiver for MockConfirmationReceiver {
    async fn submit_for_confirmation(
        &self,
        structured_text: &str,
    ) -> Result<String, DownstreamError> {
        self.script.answer(structured_text.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn subject() -> (Customer, Policy) {
        (
            Customer::new("Anna", "Muster", "Hauptstr", "1", "12345", "Berlin"),
            Policy::new("P-001", "Hausrat", "2020-01-01", "2025-01-01", "AllSure"),
        )
    }

    #[tokio::test]
    async fn queued_responses_are_consumed_in_order() {
        let generator = MockDocumentGenerator::new()
            .with_document(vec![1])
            .with_error(DownstreamError::network("down"));
        let (customer, policy) = subject();

        assert_eq!(generator.generate_document(&customer, &policy).await, Ok(vec![1]));
        assert!(generator.generate_document(&customer, &policy).await.is_err());
        // Queue drained: fallback document
        assert!(generator.generate_document(&customer, &policy).await.is_ok());
        assert_eq!(generator.call_count(), 3);
    }

    #[tokio::test]
    async fn mapper_records_the_document_it_received() {
        let mapper = MockXmlMapper::new().with_xml("<ok/>");
        let (customer, policy) = subject();
        let document = DocumentArtifact::new(vec![0x25, 0x50], Timestamp::now());

        let xml = mapper.map_to_xml(&customer, &policy, &document).await.unwrap();

        assert_eq!(xml, "<ok/>");
        assert_eq!(mapper.calls()[0].document, vec![0x25, 0x50]);
    }

    #[tokio::test]
    async fn clones_share_call_history() {
        let receiver = MockConfirmationReceiver::new();
        let observer = receiver.clone();

        receiver.submit_for_confirmation("<xml/>").await.unwrap();

        assert_eq!(observer.submissions(), vec!["<xml/>".to_string()]);
    }
}
