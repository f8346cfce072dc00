//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind host: {0}")]
    InvalidHost(String),

    #[error("Invalid downstream request timeout")]
    InvalidTimeout,

    #[error("Invalid service URL for {0} (expected http:// or https://)")]
    InvalidServiceUrl(&'static str),

    #[error("Service URL {0} must use HTTPS in production")]
    ServiceUrlMustBeHttps(&'static str),

    #[error("Preview validity window must be between 1 and 86400 seconds")]
    InvalidPreviewTtl,
}
