//! Error taxonomy for API calls.
//!
//! Transport failures and non-2xx statuses are surfaced to the caller
//! unchanged; 401 is special-cased by the client (see `net::http`) but still
//! re-raised so local UI can react. No retries anywhere.

use serde_json::Value;

/// Failure modes of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection reset, CORS, aborted fetch.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response, with the server-supplied message when present.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// 401 — session has been cleared and the user redirected to login.
    #[error("not authorized")]
    Unauthorized,

    /// 2xx response whose body does not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Requests can only be sent from the browser build.
    #[error("API is not available outside the browser")]
    Unavailable,
}

/// Extract a human-readable message from an error body, preferring
/// `message` over `error`.
pub fn error_message(body: &Value, fallback: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .unwrap_or(fallback)
        .to_owned()
}
