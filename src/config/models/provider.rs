//! Upstream provider configuration

use super::*;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Azure OpenAI deployment settings
///
/// The endpoint, credential and deployment are optional at the model level so
/// that a partially written file can be completed from the environment; the
/// client refuses to build unless all three are present.
#[derive(Clone, Deserialize)]
pub struct ProviderConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: Option<String>,
    /// Credential sent as the `api-key` header
    pub api_key: Option<String>,
    /// Deployment identifier
    pub deployment: Option<String>,
    /// API version query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Overall request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            deployment: None,
            api_version: default_api_version(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_request_timeout(),
        }
    }
}

// The credential never reaches logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set deployment
    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = Some(deployment.into());
        self
    }

    /// Set API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Environment names of required settings that are absent or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());

        let mut missing = Vec::new();
        if blank(&self.endpoint) {
            missing.push("AZURE_OPENAI_ENDPOINT");
        }
        if blank(&self.api_key) {
            missing.push("AZURE_OPENAI_KEY");
        }
        if blank(&self.deployment) {
            missing.push("AZURE_OPENAI_DEPLOYMENT");
        }
        missing
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_version.trim().is_empty() {
            return Err("API version is required".to_string());
        }

        if self.connect_timeout_secs == 0 || self.timeout_secs == 0 {
            return Err("Provider timeouts must be at least 1 second".to_string());
        }

        if self.connect_timeout_secs > self.timeout_secs {
            return Err("Connect timeout cannot exceed the request timeout".to_string());
        }

        Ok(())
    }
}
