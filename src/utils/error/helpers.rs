//! Helper functions for creating specific error types

use super::types::GatewayError;
use std::time::Duration;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamFailure(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller caused this error (maps to a 4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::PayloadTooLarge { .. } | Self::Validation(_)
        )
    }

    /// Retry hint in whole seconds, rounded up, for rate-limited requests
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after, .. } => Some(ceil_secs(*retry_after)),
            _ => None,
        }
    }
}

fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
