//! Downstream service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Base URLs of the three cancellation services.
///
/// Each URL is the service root; the adapters append their fixed paths
/// (`/cancellation/preview`, `/pdf-xml`, `/cancellation-confirm`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// Document generation service (host A)
    pub document_generator_url: String,

    /// BiPRO XML mapping service (host B)
    pub xml_mapper_url: String,

    /// Confirmation receiver (host C)
    pub confirmation_url: String,

    /// Per-request transport timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ServicesConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn urls(&self) -> [(&'static str, &str); 3] {
        [
            ("DOCUMENT_GENERATOR_URL", self.document_generator_url.as_str()),
            ("XML_MAPPER_URL", self.xml_mapper_url.as_str()),
            ("CONFIRMATION_URL", self.confirmation_url.as_str()),
        ]
    }

    /// Validate service configuration
    pub fn validate(&self, require_https: bool) -> Result<(), ValidationError> {
        for (name, url) in self.urls() {
            if url.trim().is_empty() {
                return Err(ValidationError::MissingRequired(name));
            }
            let is_https = url.starts_with("https://");
            if !is_https && !url.starts_with("http://") {
                return Err(ValidationError::InvalidServiceUrl(name));
            }
            if require_https && !is_https {
                return Err(ValidationError::ServiceUrlMustBeHttps(name));
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}
