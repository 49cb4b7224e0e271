//! Common test utilities for chat-gateway
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, providers};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let provider = providers::ScriptedProvider::replying("hi");
//!     let request = fixtures::ChatRequestFactory::simple();
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod providers;

// Re-export commonly used items
pub use fixtures::{ChatRequestFactory, ConfigFactory};
pub use providers::ScriptedProvider;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
