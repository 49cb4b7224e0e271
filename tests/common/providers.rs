//! Provider test utilities
//!
//! Stub implementations of `ChatProvider` that never touch the network.

use async_trait::async_trait;
use chat_gateway::{ChatProvider, ChatRequest, ChatResult, ProviderError};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Provider that returns a fixed outcome and counts calls
pub struct ScriptedProvider {
    outcome: Result<ChatResult, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Always reply with `reply`
    pub fn replying(reply: &str) -> Self {
        let mut usage = serde_json::Map::new();
        usage.insert("prompt_tokens".into(), json!(5));
        usage.insert("completion_tokens".into(), json!(2));
        usage.insert("total_tokens".into(), json!(7));

        Self {
            outcome: Ok(ChatResult::new(reply).with_usage(usage)),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with `error`
    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn chat(&self, _request: &ChatRequest) -> Result<ChatResult, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
