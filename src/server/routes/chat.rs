//! Chat endpoint

use crate::core::types::ChatRequest;
use crate::server::identity::client_identity;
use crate::server::middleware::request_id;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::time::Instant;
use tracing::{info, warn};

/// `POST /ai/chat`
pub async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<ChatRequest>,
) -> ActixResult<HttpResponse> {
    // Out-of-range fields are part of the body schema and never reach admission.
    if let Err(message) = request.validate() {
        return Ok(GatewayError::validation(message).to_http_response(request_id(&req)));
    }

    let identity = client_identity(&req);
    info!(identity = %identity, messages = request.messages.len(), "Chat request");

    match state
        .gateway
        .handle(&request, &identity, Instant::now())
        .await
    {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            if e.is_client_error() {
                info!(identity = %identity, error = %e, "Chat request refused");
            } else {
                warn!(identity = %identity, error = %e, "Chat request failed");
            }
            Ok(e.to_http_response(request_id(&req)))
        }
    }
}
