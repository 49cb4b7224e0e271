//! Test fixtures and data factories

use chat_gateway::config::{Config, ProviderConfig};
use chat_gateway::{ChatRequest, system_message, user_message};

/// Factory for chat requests
pub struct ChatRequestFactory;

impl ChatRequestFactory {
    /// One short user message with default sampling
    pub fn simple() -> ChatRequest {
        ChatRequest::new(vec![user_message("Say hi!")])
    }

    /// A system and a user message whose contents sum to exactly `total` chars
    pub fn with_total_chars(total: usize) -> ChatRequest {
        let system = total / 2;
        ChatRequest::new(vec![
            system_message("s".repeat(system)),
            user_message("u".repeat(total - system)),
        ])
    }
}

/// Factory for gateway configuration
pub struct ConfigFactory;

impl ConfigFactory {
    /// Defaults with the sweeper disabled
    pub fn create() -> Config {
        let mut config = Config::default();
        config.rate_limit.sweep_interval_secs = 0;
        config
    }

    /// Defaults pointing the provider at `endpoint`
    pub fn with_endpoint(endpoint: &str) -> Config {
        let mut config = Self::create();
        config.provider = ProviderConfig::default()
            .with_endpoint(endpoint)
            .with_api_key("test-key")
            .with_deployment("gpt-test");
        config
    }

    /// Custom admission limits
    pub fn with_limits(max_requests: u32, window_secs: u64) -> Config {
        let mut config = Self::create();
        config.rate_limit.max_requests = max_requests;
        config.rate_limit.window_secs = window_secs;
        config
    }
}
