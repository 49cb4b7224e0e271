//! Upstream chat providers

pub mod azure;
pub mod error;

pub use azure::AzureClient;
pub use error::ProviderError;
