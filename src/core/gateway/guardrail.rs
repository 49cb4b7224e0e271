//! Prompt size guardrail

use crate::config::GuardrailConfig;
use crate::core::types::ChatRequest;
use crate::utils::error::{GatewayError, Result};

/// Rejects prompts whose summed message content is over a character ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptGuardrail {
    max_chars: usize,
}

impl PromptGuardrail {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn from_config(config: &GuardrailConfig) -> Self {
        Self::new(config.max_prompt_chars)
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Accept a request at or under the ceiling
    pub fn check(&self, request: &ChatRequest) -> Result<()> {
        let total_chars = request.total_content_chars();
        if total_chars > self.max_chars {
            return Err(GatewayError::PayloadTooLarge {
                total_chars,
                max_chars: self.max_chars,
            });
        }
        Ok(())
    }
}
