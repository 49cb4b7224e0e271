//! Request gateway
//!
//! Ties admission control, the prompt guardrail and the upstream provider
//! together for a single chat request.

mod guardrail;
mod service;


pub use guardrail::PromptGuardrail;
pub use service::ChatGateway;
