//! Azure OpenAI Error Handling

use super::PROVIDER_NAME;
use crate::core::providers::ProviderError;
use crate::core::traits::ErrorMapper;
use crate::utils::truncate_string;

/// Longest slice of an error body kept for logs
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Azure error mapper for unified error handling
#[derive(Debug, Default)]
pub struct AzureErrorMapper;

impl ErrorMapper<ProviderError> for AzureErrorMapper {
    fn map_http_error(&self, status_code: u16, response_body: &str) -> ProviderError {
        ProviderError::api_error(
            PROVIDER_NAME,
            status_code,
            truncate_string(response_body, MAX_ERROR_BODY_CHARS),
        )
    }

    fn map_transport_error(&self, error: &reqwest::Error) -> ProviderError {
        // The URL carries the endpoint and api-version; keep it out of diagnostics.
        let message = match error.url() {
            Some(url) => error.to_string().replace(url.as_str(), "<endpoint>"),
            None => error.to_string(),
        };

        if error.is_timeout() {
            ProviderError::timeout(PROVIDER_NAME, message)
        } else if error.is_decode() {
            ProviderError::serialization(PROVIDER_NAME, message)
        } else {
            ProviderError::network(PROVIDER_NAME, message)
        }
    }

    fn map_parsing_error(&self, error: &dyn std::error::Error) -> ProviderError {
        ProviderError::serialization(PROVIDER_NAME, error.to_string())
    }
}

/// Create an Azure configuration error
pub fn azure_config_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::configuration(PROVIDER_NAME, msg)
}
