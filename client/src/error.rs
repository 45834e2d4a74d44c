//! Failure taxonomy for backend calls.
//!
//! Validation rejections never show up here; those are decision values
//! from `staffdesk_core::validation`. An `ApiError` always means the call
//! itself failed: the transport broke, the server said no, or a success
//! body did not match the documented shape.

use serde::Deserialize;

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connection, TLS, timeout).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `message` carries
    /// the body's `error` field when one was sent, otherwise a fallback
    /// derived from the status line.
    #[error("server rejected the request ({status}): {message}")]
    ServerRejected { status: u16, message: String },

    /// A success response whose body did not match the documented shape.
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Sentence fit for showing next to a form, mirroring what the portal
    /// pages display.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::ServerRejected { message, .. } => message.clone(),
            ApiError::Network(_) | ApiError::Decode { .. } => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}
