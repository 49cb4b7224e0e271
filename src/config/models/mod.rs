//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod guardrail;
pub mod logging;
pub mod provider;
pub mod rate_limit;
pub mod server;

pub use guardrail::*;
pub use logging::*;
pub use provider::*;
pub use rate_limit::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default Azure OpenAI API version
pub fn default_api_version() -> String {
    "2024-06-01".to_string()
}

/// Default provider connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    5
}

/// Default provider request timeout in seconds
pub fn default_request_timeout() -> u64 {
    10
}

/// Default admissions per window
pub fn default_max_requests() -> u32 {
    3
}

/// Default rate-limit window in seconds
pub fn default_window_secs() -> u64 {
    60 * 60
}

/// Default idle-bucket sweep interval in seconds
pub fn default_sweep_interval() -> u64 {
    300
}

/// Default prompt-size ceiling in characters
pub fn default_max_prompt_chars() -> usize {
    6000
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}
