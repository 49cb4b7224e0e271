//! HTTP route modules

pub mod chat;
pub mod health;

use crate::server::middleware::request_id;
use crate::utils::error::GatewayError;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web;

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .route("/ai/chat", web::post().to(chat::chat));
}

/// JSON extractor settings for request bodies
///
/// Oversized bodies keep actix's own 413. Every other decode failure becomes
/// a validation error.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                err.into()
            }
            other => {
                let error = GatewayError::validation(other.to_string());
                let response = error.to_http_response(request_id(req));
                InternalError::from_response(other, response).into()
            }
        })
}
