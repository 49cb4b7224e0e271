//! Client identity extraction
//!
//! The gateway keys admission on an opaque string; this is where that string
//! comes from.

use actix_web::HttpRequest;

/// Header set by proxies in front of the gateway
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Identity used when neither a forwarded address nor a peer is known
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Pick the left-most forwarded address, falling back to the peer address
pub fn identity_from_parts(forwarded_for: Option<&str>, peer: Option<&str>) -> String {
    forwarded_for
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .or_else(|| peer.map(str::trim).filter(|p| !p.is_empty()))
        .unwrap_or(UNKNOWN_IDENTITY)
        .to_string()
}

/// Identity of the client that sent `req`
pub fn client_identity(req: &HttpRequest) -> String {
    let forwarded_for = req
        .headers()
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok());
    let peer = req.peer_addr().map(|addr| addr.ip().to_string());

    identity_from_parts(forwarded_for, peer.as_deref())
}
