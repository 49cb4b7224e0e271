//! Core traits module
//!
//! Contains the abstract interfaces at the provider seam

pub mod error_mapper;
pub mod provider;

pub use error_mapper::ErrorMapper;
pub use provider::ChatProvider;
