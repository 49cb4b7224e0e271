//! Azure OpenAI Client
//!
//! HTTP client wrapper for one Azure OpenAI chat deployment

use async_trait::async_trait;
use tracing::debug;

use super::PROVIDER_NAME;
use super::chat::{AzureChatRequest, AzureChatResponse};
use super::error::{AzureErrorMapper, azure_config_error};
use super::utils::AzureUtils;
use crate::config::ProviderConfig;
use crate::core::providers::ProviderError;
use crate::core::traits::{ChatProvider, ErrorMapper};
use crate::core::types::{ChatRequest, ChatResult};

/// Header carrying the Azure credential
const API_KEY_HEADER: &str = "api-key";

/// Azure OpenAI client
#[derive(Clone)]
pub struct AzureClient {
    chat_url: String,
    api_key: String,
    deployment: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for AzureClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureClient")
            .field("deployment", &self.deployment)
            .finish_non_exhaustive()
    }
}

impl AzureClient {
    /// Create new Azure client
    ///
    /// Fails with a configuration error naming every missing setting, so the
    /// process can refuse to start instead of failing on the first request.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let missing = config.missing_fields();
        if !missing.is_empty() {
            return Err(azure_config_error(format!(
                "Missing Azure OpenAI env vars: {}",
                missing.join(", ")
            )));
        }
        config.validate().map_err(azure_config_error)?;

        let endpoint = config.endpoint.as_deref().unwrap_or_default();
        let api_key = config.api_key.as_deref().unwrap_or_default().trim();
        let deployment = config.deployment.as_deref().unwrap_or_default().trim();

        let http_client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| azure_config_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            chat_url: AzureUtils::build_chat_url(endpoint, deployment, &config.api_version),
            api_key: api_key.to_string(),
            deployment: deployment.to_string(),
            http_client,
        })
    }

    /// Deployment this client targets
    pub fn deployment(&self) -> &str {
        &self.deployment
    }
}

#[async_trait]
impl ChatProvider for AzureClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResult, ProviderError> {
        let mapper = AzureErrorMapper;

        let response = self
            .http_client
            .post(&self.chat_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&AzureChatRequest::from(request))
            .send()
            .await
            .map_err(|e| mapper.map_transport_error(&e))?;

        let status = response.status();
        debug!(deployment = %self.deployment, status = status.as_u16(), "Azure responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(mapper.map_http_error(status.as_u16(), &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| mapper.map_transport_error(&e))?;
        let parsed: AzureChatResponse =
            serde_json::from_slice(&bytes).map_err(|e| mapper.map_parsing_error(&e))?;

        parsed.into_result()
    }
}
