//! Rate limiting configuration

use super::*;
use serde::Deserialize;
use std::time::Duration;

/// Per-client admission limits
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateLimitConfig {
    /// Admissions allowed per client within one window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Trailing window length in seconds
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
    /// Idle-bucket sweep period in seconds; 0 disables the sweeper
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

impl RateLimitConfig {
    /// Window as a duration
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    /// Sweep period, or `None` when the sweeper is disabled
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_requests == 0 {
            return Err("max_requests must be at least 1".to_string());
        }

        if self.window_secs == 0 {
            return Err("window_secs must be at least 1".to_string());
        }

        Ok(())
    }
}
