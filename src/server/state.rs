//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::gateway::ChatGateway;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker. The gateway's admission table is behind
/// an `Arc`, so all workers enforce one shared set of limits.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Admission control, guardrail and provider
    pub gateway: ChatGateway,
}

impl AppState {
    pub fn new(config: Config, gateway: ChatGateway) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
