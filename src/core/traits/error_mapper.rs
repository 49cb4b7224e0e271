//! Error mapping at the HTTP boundary of a provider

/// Trait for mapping transport and protocol failures into a provider error type
///
/// Implement this for each provider so that the client code only ever deals
/// with one structured error enum instead of raw `reqwest` errors.
pub trait ErrorMapper<E>: Send + Sync + 'static {
    /// Map a non-success HTTP status and its body
    fn map_http_error(&self, status_code: u16, response_body: &str) -> E;

    /// Map a failure to send the request or receive the response
    fn map_transport_error(&self, error: &reqwest::Error) -> E;

    /// Map a response body that could not be decoded
    fn map_parsing_error(&self, error: &dyn std::error::Error) -> E;
}
