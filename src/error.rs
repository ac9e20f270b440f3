//! Error types for the Gengo client.

use thiserror::Error;

use crate::config::ConfigError;

/// Failure below the API: connection, timeout, TLS or HTTP protocol.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client failed to send the request or read the response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors returned by [`crate::GengoClient`].
///
/// Exactly one variant describes a failed call. `Transport`, `Envelope`,
/// `Api` and `Payload` map to the stages of a round trip; the remaining
/// variants fail before anything is sent.
#[derive(Debug, Error)]
pub enum GengoError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body is not a valid `{opstat, response, err}` envelope.
    #[error("malformed response envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The API answered with `opstat = "error"`.
    #[error("API error: [{code}] {message}")]
    Api {
        /// Gengo error code.
        code: i64,
        /// Message from the API.
        message: String,
    },

    /// The envelope was ok but its payload does not fit the expected type.
    #[error("unexpected response payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// A request body could not be serialised.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Reading an upload from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GengoError {
    /// True when the remote API rejected the call.
    pub fn is_api(&self) -> bool {
        matches!(self, GengoError::Api { .. })
    }

    /// The Gengo error code, if this is an API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            GengoError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type for Gengo operations.
pub type Result<T> = std::result::Result<T, GengoError>;
