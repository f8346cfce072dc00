//! Presentation configuration (downloads and previews)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::ports::DEFAULT_DOWNLOAD_FILENAME;

/// Where presented documents are written and how long previews live.
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationConfig {
    /// Directory receiving downloaded documents
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    /// Directory receiving temporary preview copies
    #[serde(default = "default_preview_dir")]
    pub preview_dir: PathBuf,

    /// Seconds a preview stays available
    #[serde(default = "default_preview_ttl")]
    pub preview_ttl_secs: u64,

    /// Filename used when a download request names none
    #[serde(default = "default_filename")]
    pub default_filename: String,
}

/// Upper bound for `preview_ttl_secs` (one day).
const MAX_PREVIEW_TTL_SECS: u64 = 86_400;

impl PresentationConfig {
    /// Get preview validity as Duration
    pub fn preview_ttl(&self) -> Duration {
        Duration::from_secs(self.preview_ttl_secs)
    }

    /// Validate presentation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.preview_ttl_secs == 0 || self.preview_ttl_secs > MAX_PREVIEW_TTL_SECS {
            return Err(ValidationError::InvalidPreviewTtl);
        }
        if self.default_filename.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DEFAULT_FILENAME"));
        }
        Ok(())
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            preview_dir: default_preview_dir(),
            preview_ttl_secs: default_preview_ttl(),
            default_filename: default_filename(),
        }
    }
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_preview_dir() -> PathBuf {
    std::env::temp_dir().join("bipro-previews")
}

fn default_preview_ttl() -> u64 {
    60
}

fn default_filename() -> String {
    DEFAULT_DOWNLOAD_FILENAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_defaults() {
        let config = PresentationConfig::default();
        assert_eq!(config.download_dir, PathBuf::from("downloads"));
        assert_eq!(config.preview_ttl(), Duration::from_secs(60));
        assert_eq!(config.default_filename, "kuendigung.pdf");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ttl_above_one_day_is_invalid() {
        let config = PresentationConfig {
            preview_ttl_secs: 10_000_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPreviewTtl)
        ));

        let config = PresentationConfig {
            preview_ttl_secs: 86_400,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_ttl_is_invalid() {
        let config = PresentationConfig {
            preview_ttl_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
