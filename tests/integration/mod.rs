//! Integration tests for chat-gateway
//!
//! These tests drive the public API across module boundaries.

pub mod admission_tests;
pub mod config_tests;
pub mod http_tests;
