//! Chat request and result types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Smallest accepted `max_tokens`
pub const MIN_MAX_TOKENS: u32 = 1;
/// Largest accepted `max_tokens`
pub const MAX_MAX_TOKENS: u32 = 512;
/// Sampling temperature bounds (inclusive)
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=1.0;

fn default_max_tokens() -> u32 {
    256
}

fn default_temperature() -> f32 {
    0.7
}

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Create a system message
pub fn system_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(MessageRole::System, content)
}

/// Create a user message
pub fn user_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(MessageRole::User, content)
}

/// Create an assistant message
pub fn assistant_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(MessageRole::Assistant, content)
}

/// Inbound chat request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl ChatRequest {
    /// Create a request with default sampling parameters
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Summed character count of every message's content
    pub fn total_content_chars(&self) -> usize {
        self.messages.iter().map(|m| m.content.chars().count()).sum()
    }

    /// Check `max_tokens` and `temperature` against their accepted ranges
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&self.max_tokens) {
            return Err(format!(
                "max_tokens must be between {} and {}, got {}",
                MIN_MAX_TOKENS, MAX_MAX_TOKENS, self.max_tokens
            ));
        }

        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(format!(
                "temperature must be between {} and {}, got {}",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end(),
                self.temperature
            ));
        }

        Ok(())
    }
}

/// Reply from the provider with its token accounting passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    pub reply: String,
    #[serde(default)]
    pub usage: Map<String, Value>,
}

impl ChatResult {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            usage: Map::new(),
        }
    }

    pub fn with_usage(mut self, usage: Map<String, Value>) -> Self {
        self.usage = usage;
        self
    }
}
