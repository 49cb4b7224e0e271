//! Provider error type
//!
//! Every failure at the provider seam is one of these variants. The gateway
//! maps all of them to a single upstream-failure outcome, but keeping the
//! kinds separate makes logs and tests precise.

/// Provider error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    /// Non-success status; `message` holds a truncated body for logs only
    #[error("{provider} returned status {status}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Serialization error for {provider}: {message}")]
    Serialization {
        provider: &'static str,
        message: String,
    },

    #[error("Empty response from {provider}: {message}")]
    EmptyResponse {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn serialization(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            provider,
            message: message.into(),
        }
    }

    pub fn empty_response(provider: &'static str, message: impl Into<String>) -> Self {
        Self::EmptyResponse {
            provider,
            message: message.into(),
        }
    }

    /// Name of the provider that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Configuration { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Network { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Serialization { provider, .. }
            | Self::EmptyResponse { provider, .. } => provider,
        }
    }
}
