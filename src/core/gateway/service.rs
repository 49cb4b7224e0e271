//! End-to-end handling of one chat request

use super::guardrail::PromptGuardrail;
use crate::config::Config;
use crate::core::admission::{AdmissionController, Decision};
use crate::core::traits::ChatProvider;
use crate::core::types::{ChatRequest, ChatResult};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Request gateway
///
/// Owns the admission table and the shared provider client. Requests are
/// handled in a fixed order: admission, field checks, size guardrail,
/// provider call. A request rejected by any step after admission has already
/// used its slot.
#[derive(Clone)]
pub struct ChatGateway {
    admission: Arc<AdmissionController>,
    guardrail: PromptGuardrail,
    provider: Arc<dyn ChatProvider>,
}

impl std::fmt::Debug for ChatGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatGateway")
            .field("admission", &self.admission)
            .field("guardrail", &self.guardrail)
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl ChatGateway {
    pub fn new(
        admission: Arc<AdmissionController>,
        guardrail: PromptGuardrail,
        provider: Arc<dyn ChatProvider>,
    ) -> Self {
        Self {
            admission,
            guardrail,
            provider,
        }
    }

    /// Build a gateway with a fresh admission table from configuration
    pub fn from_config(config: &Config, provider: Arc<dyn ChatProvider>) -> Self {
        Self::new(
            Arc::new(AdmissionController::from_config(&config.rate_limit)),
            PromptGuardrail::from_config(&config.guardrail),
            provider,
        )
    }

    pub fn admission(&self) -> &Arc<AdmissionController> {
        &self.admission
    }

    pub fn guardrail(&self) -> &PromptGuardrail {
        &self.guardrail
    }

    /// Handle one request from `identity` arriving at `now`
    pub async fn handle(
        &self,
        request: &ChatRequest,
        identity: &str,
        now: Instant,
    ) -> Result<ChatResult> {
        if let Decision::Rejected { retry_after } = self.admission.try_admit(identity, now) {
            info!(
                identity = %identity,
                retry_after_secs = retry_after.as_secs(),
                "Rate limit exceeded"
            );
            return Err(GatewayError::RateLimited {
                retry_after,
                limit: self.admission.max_requests(),
                window: self.admission.window(),
            });
        }

        request.validate().map_err(GatewayError::validation)?;

        if let Err(e) = self.guardrail.check(request) {
            info!(identity = %identity, "Prompt rejected by size guardrail");
            return Err(e);
        }

        debug!(
            identity = %identity,
            provider = self.provider.name(),
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            "Forwarding chat request"
        );

        self.provider.chat(request).await.map_err(|e| {
            warn!(
                identity = %identity,
                provider = e.provider(),
                error = ?e,
                "Provider call failed"
            );
            GatewayError::upstream(e.to_string())
        })
    }
}
