//! Error handling for the Gateway
//!
//! This module defines the error taxonomy and its HTTP rendering.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
