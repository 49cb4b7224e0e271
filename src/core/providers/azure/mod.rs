//! Azure OpenAI Provider
//!
//! Chat completions against a single Azure OpenAI deployment.

pub mod chat;
pub mod client;
pub mod error;
pub mod utils;

/// Name reported in logs and provider errors
pub const PROVIDER_NAME: &str = "azure";

pub use client::AzureClient;
pub use error::AzureErrorMapper;
pub use utils::AzureUtils;
