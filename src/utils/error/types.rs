//! Error types for the Gateway

use std::time::Duration;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client exhausted its admission quota for the current window
    #[error(
        "Rate limit exceeded. Max {limit} requests every {minutes} minutes.",
        minutes = .window.as_secs() / 60
    )]
    RateLimited {
        /// Time until the oldest admission in the window expires
        retry_after: Duration,
        /// Admissions allowed per window
        limit: u32,
        /// Length of the trailing window
        window: Duration,
    },

    /// Summed prompt content exceeds the guardrail ceiling
    #[error("Prompt too long")]
    PayloadTooLarge {
        /// Characters submitted across all messages
        total_chars: usize,
        /// Configured ceiling
        max_chars: usize,
    },

    /// Any failure of the upstream generation provider
    #[error("AI provider error: {0}")]
    UpstreamFailure(String),

    /// Request fields outside their accepted ranges
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
