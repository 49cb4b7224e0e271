//! Greeting and health check endpoints

use actix_web::HttpResponse;
use serde_json::json;
use tracing::debug;

/// Root greeting
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello from Azure with AI!" }))
}

/// Liveness probe
///
/// Reports only that the process is serving; the provider is not contacted.
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");
    HttpResponse::Ok().json(json!({ "status": "Alive!" }))
}
