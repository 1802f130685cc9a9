//! Unified error-to-status mapping for the gateway API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use textgate_client::ClientError;

use crate::types::ErrorResponse;

/// Errors produced by the gateway handlers.
///
/// Every failure path classifies into exactly one variant, and each variant
/// maps to exactly one HTTP status, regardless of which endpoint raised it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request is missing or malformed input.
    #[error("{0}")]
    InvalidRequest(String),

    /// The target collection already exists.
    #[error("Collection already exists")]
    Conflict,

    /// The requested collection or record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The database connection was not established at startup.
    #[error("vector database connection is not ready")]
    Unavailable,

    /// The upstream database failed in a way the gateway cannot classify.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            // Conflicts answer 400, not 409: the duplicate-collection error
            // is part of the gateway's observable contract.
            Self::InvalidRequest(_) | Self::Conflict => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::AlreadyExists(_) => Self::Conflict,
            ClientError::NotFound(message) => Self::NotFound(message),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = %status, error = %self, "request failed");
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
