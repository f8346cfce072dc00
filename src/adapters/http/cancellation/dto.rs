//! Request and response types for the cancellation endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{
    DownloadDocumentCommand, GenerateDocumentResult, StartCancellationCommand,
    StartCancellationResult,
};
use crate::domain::cancellation::{ArtifactStatus, Customer, Policy};
use crate::domain::foundation::Timestamp;
use crate::ports::PresentedArtifact;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Customer as entered. Absent fields arrive as empty strings and are
/// reported by validation rather than by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
}

impl From<CustomerInput> for Customer {
    fn from(input: CustomerInput) -> Self {
        Customer {
            first_name: input.first_name,
            last_name: input.last_name,
            street: input.street,
            house_number: input.house_number,
            postal_code: input.postal_code,
            city: input.city,
        }
    }
}

/// Policy as entered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyInput {
    pub policy_number: String,
    pub product_name: String,
    pub start_date: String,
    pub end_date: String,
    pub insurance_company: String,
}

impl From<PolicyInput> for Policy {
    fn from(input: PolicyInput) -> Self {
        Policy {
            policy_number: input.policy_number,
            product_name: input.product_name,
            start_date: input.start_date,
            end_date: input.end_date,
            insurance_company: input.insurance_company,
        }
    }
}

/// Body of `POST /cancellations` and `POST /cancellations/document`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CancellationRequest {
    #[serde(default)]
    pub customer: Option<CustomerInput>,
    #[serde(default)]
    pub policy: Option<PolicyInput>,
}

impl From<CancellationRequest> for StartCancellationCommand {
    fn from(req: CancellationRequest) -> Self {
        StartCancellationCommand {
            customer: req.customer.map(Customer::from),
            policy: req.policy.map(Policy::from),
        }
    }
}

/// Optional body of `POST /artifacts/document/download`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub filename: Option<String>,
}

impl From<DownloadRequest> for DownloadDocumentCommand {
    fn from(req: DownloadRequest) -> Self {
        DownloadDocumentCommand {
            filename: req.filename,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationResponse {
    pub acknowledgment: String,
    pub document_generated_at: Timestamp,
    pub structured_text_generated_at: Timestamp,
    pub artifacts: ArtifactStatus,
}

impl From<StartCancellationResult> for CancellationResponse {
    fn from(result: StartCancellationResult) -> Self {
        Self {
            acknowledgment: result.acknowledgment,
            document_generated_at: result.document_generated_at,
            structured_text_generated_at: result.structured_text_generated_at,
            artifacts: result.artifacts,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentGeneratedResponse {
    pub generated_at: Timestamp,
    pub size_bytes: usize,
    pub checksum: String,
}

impl From<GenerateDocumentResult> for DocumentGeneratedResponse {
    fn from(result: GenerateDocumentResult) -> Self {
        Self {
            generated_at: result.generated_at,
            size_bytes: result.size_bytes,
            checksum: result.checksum,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentedArtifactResponse {
    pub location: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
}

impl From<PresentedArtifact> for PresentedArtifactResponse {
    fn from(presented: PresentedArtifact) -> Self {
        Self {
            location: presented.location.display().to_string(),
            filename: presented.filename,
            expires_at: presented.expires_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_GATEWAY".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
