//! Error types for the Weaviate client.

use thiserror::Error;

/// Errors returned by [`WeaviateClient`](crate::WeaviateClient) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The request never produced a usable response (connect failure,
    /// timeout, TLS error).
    #[error("request to Weaviate failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The target collection already exists upstream.
    #[error("collection already exists: {0}")]
    AlreadyExists(String),

    /// The requested entity does not exist upstream.
    #[error("not found: {0}")]
    NotFound(String),

    /// Weaviate answered with a non-success status not covered above.
    #[error("Weaviate error {status}: {message}")]
    Api {
        /// HTTP status code of the upstream response.
        status: u16,
        /// Error body returned by the upstream service.
        message: String,
    },

    /// Weaviate answered 2xx but the body did not match the expected shape.
    #[error("unexpected response from Weaviate: {0}")]
    InvalidResponse(String),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Maps an upstream error status and body to a [`ClientError`].
///
/// Weaviate reports a duplicate collection only through the error message,
/// so the "already exists" substring check is the classification point for
/// conflicts.
pub(crate) fn classify_error(status: u16, message: String) -> ClientError {
    if message.contains("already exists") {
        return ClientError::AlreadyExists(message);
    }
    match status {
        404 => ClientError::NotFound(message),
        _ => ClientError::Api { status, message },
    }
}
