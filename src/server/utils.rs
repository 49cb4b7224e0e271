//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a bind failure into an actionable startup error
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> GatewayError {
        let message = match error.kind() {
            ErrorKind::AddrInUse => format!(
                "Port {port} is already in use. Stop the other process \
                 (lsof -i:{port}) or pick another port with --port {} or GATEWAY_PORT={}",
                port.saturating_add(1),
                port.saturating_add(1),
            ),
            ErrorKind::PermissionDenied => format!(
                "Permission denied for port {port}. Use a port >= 1024, \
                 for example --port 8000 or GATEWAY_PORT=8000"
            ),
            _ => format!("Failed to bind to {}: {}", bind_addr, error),
        };
        GatewayError::internal(message)
    }
}
