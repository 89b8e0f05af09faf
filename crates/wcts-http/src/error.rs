//! HTTP client errors

use thiserror::Error;

/// Errors for WCTS-over-HTTP client operations.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a `ServiceExceptionReport`.
    #[error("service exception: {0}")]
    Service(String),

    /// The server answered with something this client cannot interpret.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
