//! Admission control
//!
//! Per-client sliding-window rate limiting with lazy eviction and an optional
//! idle sweep.

mod controller;
mod maintenance;
mod types;


pub use controller::AdmissionController;
pub use types::Decision;
