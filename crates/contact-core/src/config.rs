//! Delivery configuration loaded from YAML/JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::messages;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config validation failed: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

fn default_missing_phone_label() -> String {
    messages::MISSING_PHONE_LABEL.to_string()
}

/// Where and how contact requests are delivered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// WhatsApp number in international format, digits only
    #[serde(default)]
    pub whatsapp_number: String,

    /// Form backend endpoint (e.g. a Formspree form URL)
    #[serde(default)]
    pub form_endpoint: Option<String>,

    /// Text used in messages when no phone was given
    #[serde(default = "default_missing_phone_label")]
    pub missing_phone_label: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "18494470901".to_string(),
            form_endpoint: None,
            missing_phone_label: default_missing_phone_label(),
        }
    }
}

impl ContactConfig {
    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ContactConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ContactConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.whatsapp_number.is_empty() {
            return Err(ConfigError::MissingField("whatsapp_number".to_string()));
        }

        if !self.whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::ValidationError(format!(
                "whatsapp_number must contain only digits: {}",
                self.whatsapp_number
            )));
        }

        if let Some(endpoint) = &self.form_endpoint {
            if !endpoint.starts_with("https://") {
                return Err(ConfigError::ValidationError(format!(
                    "form_endpoint must be an https URL: {}",
                    endpoint
                )));
            }
        }

        Ok(())
    }
}
