//! Prompt guardrail configuration

use super::*;
use serde::Deserialize;

/// Request-shape limits applied after admission
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GuardrailConfig {
    /// Ceiling on the summed character count of all message contents
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: default_max_prompt_chars(),
        }
    }
}

impl GuardrailConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_prompt_chars == 0 {
            return Err("max_prompt_chars must be at least 1".to_string());
        }
        Ok(())
    }
}
