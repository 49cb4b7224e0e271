//! Core functionality for the Gateway
//!
//! Admission control, request orchestration and the upstream provider seam.

pub mod admission;
pub mod gateway;
pub mod providers;
pub mod traits;
pub mod types;
