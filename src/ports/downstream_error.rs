//! Errors shared by the three downstream cancellation services.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The payload kind a downstream adapter expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    /// Opaque binary document.
    Binary,
    /// UTF-8 text (XML document or acknowledgment).
    Text,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Binary => write!(f, "binary"),
            PayloadKind::Text => write!(f, "text"),
        }
    }
}

/// Coarse classification of a `DownstreamError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownstreamErrorKind {
    /// The call did not complete successfully (network, timeout, status).
    Transport,
    /// The call completed but the body was not the expected kind.
    Shape,
    /// The request could not be built; nothing was sent.
    Request,
}

/// A downstream call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownstreamError {
    /// Connection or protocol failure before a response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The transport gave up waiting for a response.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The service answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it was readable.
        body: String,
    },

    /// The request body or client could not be prepared.
    #[error("failed to prepare request: {0}")]
    Request(String),

    /// The response body did not match the expected payload kind.
    #[error("expected {expected} response: {detail}")]
    Shape {
        /// What the adapter expected.
        expected: PayloadKind,
        /// What was wrong with the body.
        detail: String,
    },
}

impl DownstreamError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a request preparation error.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    /// Creates a shape error.
    pub fn shape(expected: PayloadKind, detail: impl Into<String>) -> Self {
        Self::Shape {
            expected,
            detail: detail.into(),
        }
    }

    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> DownstreamErrorKind {
        match self {
            DownstreamError::Shape { .. } => DownstreamErrorKind::Shape,
            DownstreamError::Request(_) => DownstreamErrorKind::Request,
            DownstreamError::Network(_)
            | DownstreamError::Timeout { .. }
            | DownstreamError::Status { .. } => DownstreamErrorKind::Transport,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == DownstreamErrorKind::Transport
    }

    pub fn is_shape(&self) -> bool {
        self.kind() == DownstreamErrorKind::Shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_network_errors_are_transport() {
        assert!(DownstreamError::network("refused").is_transport());
        assert!(DownstreamError::Timeout { timeout_secs: 5 }.is_transport());
        assert!(DownstreamError::Status {
            status: 503,
            body: String::new()
        }
        .is_transport());
    }

    #[test]
    fn request_preparation_error_is_neither_transport_nor_shape() {
        let err = DownstreamError::request("failed to encode customer: boom");
        assert_eq!(err.kind(), DownstreamErrorKind::Request);
        assert!(!err.is_transport());
        assert!(!err.is_shape());
        assert_eq!(
            err.to_string(),
            "failed to prepare request: failed to encode customer: boom"
        );
    }

    #[test]
    fn shape_error_is_not_transport() {
        let err = DownstreamError::shape(PayloadKind::Binary, "empty body");
        assert!(err.is_shape());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "expected binary response: empty body");
    }
}
