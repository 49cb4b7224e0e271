//! # chat-gateway
//!
//! A single-endpoint chat gateway in front of Azure OpenAI.
//!
//! Every request to `POST /ai/chat` passes through:
//!
//! - **Admission control**: at most `N` requests per client within any
//!   trailing window of length `W` (sliding-window log, default 3 per hour)
//! - **Prompt guardrail**: the summed message content must not exceed a
//!   character ceiling (default 6000)
//! - **One upstream call**: forwarded to the configured Azure OpenAI
//!   deployment; any provider failure becomes a single `502` outcome
//!
//! ## Embedding the gateway
//!
//! ```rust,no_run
//! use chat_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Using the core directly
//!
//! ```rust
//! use chat_gateway::core::admission::{AdmissionController, Decision};
//! use std::time::{Duration, Instant};
//!
//! let controller = AdmissionController::new(1, Duration::from_secs(60));
//! let now = Instant::now();
//! assert_eq!(controller.try_admit("10.0.0.1", now), Decision::Admitted);
//! assert!(!controller.try_admit("10.0.0.1", now).is_admitted());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::admission::{AdmissionController, Decision};
pub use core::gateway::{ChatGateway, PromptGuardrail};
pub use core::providers::{AzureClient, ProviderError};
pub use core::traits::ChatProvider;
pub use core::types::{
    ChatMessage, ChatRequest, ChatResult, MessageRole, assistant_message, system_message,
    user_message,
};

use tracing::info;

/// The gateway process: configuration plus a ready-to-start HTTP server
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Run the gateway server until shutdown
    pub async fn run(self) -> Result<()> {
        let build = build_info();
        info!(
            version = build.version,
            git_hash = build.git_hash,
            build_time = build.build_time,
            "Starting chat gateway"
        );
        info!("Configuration: {:#?}", self.config);

        self.server.start().await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time as seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build metadata embedded at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
