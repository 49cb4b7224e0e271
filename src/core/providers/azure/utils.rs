//! Azure OpenAI Utilities

/// Azure OpenAI utilities
pub struct AzureUtils;

impl AzureUtils {
    /// Build the chat completions URL for a deployment
    pub fn build_chat_url(azure_endpoint: &str, deployment_name: &str, api_version: &str) -> String {
        let base = azure_endpoint.trim().trim_end_matches('/');
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            base,
            deployment_name.trim(),
            api_version.trim()
        )
    }
}
