//! Chat provider trait definition

use async_trait::async_trait;

use crate::core::providers::ProviderError;
use crate::core::types::{ChatRequest, ChatResult};

/// A remote text-generation backend
///
/// Implementations are constructed once at startup and shared read-only
/// across concurrent requests, so every method takes `&self`.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Short provider name used in logs and diagnostics
    fn name(&self) -> &'static str;

    /// Perform one chat completion with `n = 1`
    ///
    /// Every failure is returned as a [`ProviderError`]; implementations never
    /// retry.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResult, ProviderError>;
}
