//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    /// Stable error code included in every error body
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "CONFIG_ERROR",
            GatewayError::RateLimited { .. } => "RATE_LIMIT_EXCEEDED",
            GatewayError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            GatewayError::UpstreamFailure(_) => "PROVIDER_ERROR",
            GatewayError::Validation(_) => "VALIDATION_ERROR",
            GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Build the JSON error response, tagging it with the request id when known
    pub fn to_http_response(&self, request_id: Option<String>) -> HttpResponse {
        let message = match self {
            GatewayError::Internal(_) => "An internal error occurred".to_string(),
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: message.clone(),
                timestamp: chrono::Utc::now().timestamp(),
                request_id,
            },
            detail: message,
        };

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(secs) = self.retry_after_secs() {
            builder.insert_header((RETRY_AFTER, secs.to_string()));
        }
        builder.json(body)
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::UpstreamFailure(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::Config(_) | GatewayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.to_http_response(None)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    /// Human-readable message, duplicated at the top level for simple clients
    pub detail: String,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
