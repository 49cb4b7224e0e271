//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::ProviderError;

// Configuration problems surface while the client is built; every other
// provider failure is an upstream failure from the caller's point of view.
impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { message, .. } => GatewayError::Config(message),
            other => GatewayError::UpstreamFailure(other.to_string()),
        }
    }
}
