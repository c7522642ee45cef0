//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

use carquote_application::{DEFAULT_ENDPOINT, PredictorConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("predictor endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("predictor endpoint must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),
}

/// Raw predictor configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePredictorConfig {
    /// Full URL of the predict endpoint
    pub endpoint: String,
    /// Request timeout in seconds (unset = wait indefinitely)
    pub timeout_seconds: Option<u64>,
}

impl Default for FilePredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Log file used by the interactive form
    pub file: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub predictor: FilePredictorConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.predictor.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let endpoint = self.predictor.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigValidationError::UnsupportedScheme(endpoint.to_string()));
        }

        Ok(())
    }

    /// Convert to the application-level predictor configuration
    pub fn predictor_config(&self) -> PredictorConfig {
        let mut config = PredictorConfig::default().with_endpoint(self.predictor.endpoint.trim());
        if let Some(secs) = self.predictor.timeout_seconds {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    /// Render as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[predictor]
endpoint = "http://10.0.0.5:8000/predict"
timeout_seconds = 30

[output]
color = false

[logging]
file = "/tmp/carquote.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.predictor.endpoint, "http://10.0.0.5:8000/predict");
        assert_eq!(config.predictor.timeout_seconds, Some(30));
        assert!(!config.output.color);
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/carquote.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[predictor]
timeout_seconds = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.predictor.endpoint, DEFAULT_ENDPOINT);
        assert!(config.output.color);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.predictor.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_endpoint() {
        let mut config = FileConfig::default();
        config.predictor.endpoint = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyEndpoint));

        config.predictor.endpoint = "ftp://example.com/predict".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_predictor_config_conversion() {
        let mut config = FileConfig::default();
        assert_eq!(config.predictor_config(), PredictorConfig::default());

        config.predictor.timeout_seconds = Some(15);
        assert_eq!(
            config.predictor_config().timeout,
            Some(Duration::from_secs(15))
        );
    }

    #[test]
    fn test_to_toml_round_trips_defaults() {
        let rendered = FileConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[predictor]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, FileConfig::default());
    }
}
