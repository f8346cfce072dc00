//! Confirmation Receiver Port - Stage 3 of the pipeline.

use async_trait::async_trait;

use super::DownstreamError;

/// Port for the service that accepts the mapped cancellation.
#[async_trait]
pub trait ConfirmationReceiver: Send + Sync {
    /// Submit the BiPRO XML and return the receiver's acknowledgment text.
    async fn submit_for_confirmation(&self, structured_text: &str)
        -> Result<String, DownstreamError>;
}
