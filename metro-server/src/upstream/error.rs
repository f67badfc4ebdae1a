//! Upstream routing service error types.

/// Errors from the upstream routing client.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not a route
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Upstream could not resolve one of the stations
    #[error("upstream has no route from {from} to {to}")]
    NotFound { from: String, to: String },

    /// Upstream returned an error status code
    #[error("upstream error {status}: {message}")]
    Status { status: u16, message: String },
}
