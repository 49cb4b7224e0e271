//! Environment variable overlay
//!
//! Every setting can be supplied through the environment. Values read here
//! override whatever a configuration file provided.

use super::Config;
use crate::utils::error::{GatewayError, Result};
use std::str::FromStr;
use tracing::debug;

pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_KEY: &str = "AZURE_OPENAI_KEY";
pub const AZURE_OPENAI_DEPLOYMENT: &str = "AZURE_OPENAI_DEPLOYMENT";
pub const AZURE_OPENAI_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";
pub const PROVIDER_CONNECT_TIMEOUT_SECS: &str = "PROVIDER_CONNECT_TIMEOUT_SECS";
pub const PROVIDER_TIMEOUT_SECS: &str = "PROVIDER_TIMEOUT_SECS";
pub const RATE_LIMIT_COUNT: &str = "RATE_LIMIT_COUNT";
pub const RATE_LIMIT_WINDOW_SECS: &str = "RATE_LIMIT_WINDOW_SECS";
pub const RATE_LIMIT_SWEEP_INTERVAL_SECS: &str = "RATE_LIMIT_SWEEP_INTERVAL_SECS";
pub const MAX_PROMPT_CHARS: &str = "MAX_PROMPT_CHARS";
pub const GATEWAY_HOST: &str = "GATEWAY_HOST";
pub const GATEWAY_PORT: &str = "GATEWAY_PORT";
pub const GATEWAY_WORKERS: &str = "GATEWAY_WORKERS";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_FORMAT: &str = "LOG_FORMAT";

impl Config {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Provider
        if let Some(endpoint) = get(AZURE_OPENAI_ENDPOINT) {
            self.provider.endpoint = Some(endpoint);
        }
        if let Some(api_key) = get(AZURE_OPENAI_KEY) {
            self.provider.api_key = Some(api_key);
        }
        if let Some(deployment) = get(AZURE_OPENAI_DEPLOYMENT) {
            self.provider.deployment = Some(deployment);
        }
        if let Some(version) = get(AZURE_OPENAI_API_VERSION) {
            self.provider.api_version = version;
        }
        if let Some(secs) = parse_var(&get, PROVIDER_CONNECT_TIMEOUT_SECS)? {
            self.provider.connect_timeout_secs = secs;
        }
        if let Some(secs) = parse_var(&get, PROVIDER_TIMEOUT_SECS)? {
            self.provider.timeout_secs = secs;
        }

        // Admission control and guardrails
        if let Some(count) = parse_var(&get, RATE_LIMIT_COUNT)? {
            self.rate_limit.max_requests = count;
        }
        if let Some(secs) = parse_var(&get, RATE_LIMIT_WINDOW_SECS)? {
            self.rate_limit.window_secs = secs;
        }
        if let Some(secs) = parse_var(&get, RATE_LIMIT_SWEEP_INTERVAL_SECS)? {
            self.rate_limit.sweep_interval_secs = secs;
        }
        if let Some(chars) = parse_var(&get, MAX_PROMPT_CHARS)? {
            self.guardrail.max_prompt_chars = chars;
        }

        // Server
        if let Some(host) = get(GATEWAY_HOST) {
            self.server.host = host;
        }
        if let Some(port) = parse_var(&get, GATEWAY_PORT)? {
            self.server.port = port;
        }
        if let Some(workers) = parse_var(&get, GATEWAY_WORKERS)? {
            self.server.workers = Some(workers);
        }

        // Logging
        if let Some(level) = get(LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = get(LOG_FORMAT) {
            self.logging.format = format
                .parse()
                .map_err(|e| GatewayError::config(format!("Invalid {}: {}", LOG_FORMAT, e)))?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| GatewayError::config(format!("Invalid {}: {}", key, e)))
        })
        .transpose()
}
