//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BIPRO_CANCELLATION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use bipro_cancellation::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Document generator at {}", config.services.document_generator_url);
//! ```

mod error;
mod presentation;
mod server;
mod services;

pub use error::{ConfigError, ValidationError};
pub use presentation::PresentationConfig;
pub use server::{Environment, ServerConfig};
pub use services::ServicesConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Downstream cancellation services
    pub services: ServicesConfig,

    /// Download and preview handling
    #[serde(default)]
    pub presentation: PresentationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BIPRO_CANCELLATION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BIPRO_CANCELLATION__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BIPRO_CANCELLATION__SERVICES__XML_MAPPER_URL=...` -> `services.xml_mapper_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BIPRO_CANCELLATION")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.services.validate(self.is_production())?;
        self.presentation.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
