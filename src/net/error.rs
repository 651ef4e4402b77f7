//! Failure taxonomy for AJAX calls against the search backend.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Why a request produced no usable payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, aborted).
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The server answered without a body where one was required.
    #[error("empty response body")]
    EmptyBody,
    /// The body was neither the expected JSON nor replaceable markup.
    #[error("unexpected response body")]
    UnexpectedBody,
    /// The body looked like JSON but did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// Called outside a browser (SSR or native tests).
    #[error("not available on server")]
    Unavailable,
}
