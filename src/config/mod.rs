//! Configuration management for the Gateway
//!
//! Settings come from an optional YAML file with environment variables layered
//! on top. A `.env` file is honoured by the binary before loading.

pub mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Per-client admission limits
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Prompt guardrails
    #[serde(default)]
    pub guardrail: GuardrailConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, |key| std::env::var(key).ok()).await
    }

    /// Load configuration from a YAML file with overrides from `lookup`
    pub async fn from_file_with<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_yaml_str(&content)?;
        config.apply_overrides(lookup)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML text without applying overrides
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.provider
            .validate()
            .map_err(|e| GatewayError::Config(format!("Provider config error: {}", e)))?;

        self.rate_limit
            .validate()
            .map_err(|e| GatewayError::Config(format!("Rate limit config error: {}", e)))?;

        self.guardrail
            .validate()
            .map_err(|e| GatewayError::Config(format!("Guardrail config error: {}", e)))?;

        Ok(())
    }
}
