//! Azure OpenAI chat completion wire format

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PROVIDER_NAME;
use crate::core::providers::ProviderError;
use crate::core::types::{ChatMessage, ChatRequest, ChatResult};

/// Request body for `POST .../chat/completions`
#[derive(Debug, Serialize)]
pub struct AzureChatRequest<'a> {
    pub messages: &'a [ChatMessage],
    pub max_tokens: u32,
    pub temperature: f32,
    pub n: u32,
}

impl<'a> From<&'a ChatRequest> for AzureChatRequest<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            n: 1,
        }
    }
}

/// Response body; only the fields the gateway reads are modelled
#[derive(Debug, Deserialize)]
pub struct AzureChatResponse {
    #[serde(default)]
    pub choices: Vec<AzureChoice>,
    #[serde(default)]
    pub usage: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub struct AzureChoice {
    pub message: AzureChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct AzureChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl AzureChatResponse {
    /// Take the first choice's content as the reply
    pub fn into_result(self) -> Result<ChatResult, ProviderError> {
        let reply = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::empty_response(PROVIDER_NAME, "no choices returned"))?
            .message
            .content
            .ok_or_else(|| ProviderError::empty_response(PROVIDER_NAME, "choice has no content"))?;

        Ok(ChatResult {
            reply,
            usage: self.usage.unwrap_or_default(),
        })
    }
}
