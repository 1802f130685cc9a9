//! textgate server - REST gateway library for a Weaviate vector database.
//!
//! This crate provides the HTTP handlers, routing, and types for the
//! textgate REST API. Collection names are resolved case-insensitively, and
//! every database failure classifies into one [`ApiError`] variant with a
//! fixed HTTP status.
//!
//! ## OpenAPI Documentation
//!
//! The API is documented using OpenAPI 3.0. Access the interactive
//! documentation at:
//! - Swagger UI: `GET /docs` (the root path redirects here)
//! - OpenAPI JSON: `GET /api-docs/openapi.json`

mod error;
mod handlers;
mod resolve;
mod types;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

use textgate_client::WeaviateClient;

pub use error::ApiError;
pub use types::*;

pub use handlers::{
    create_collection, delete_collection, get_collection, health_check, insert_data,
    list_collections, list_data, search_collection,
};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// textgate API documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "textgate API",
        version = "0.1.0",
        description = "REST gateway for text collections in a Weaviate vector database. \
            Collections hold a single vectorized text property; search is a \
            semantic nearest-text-match delegated to the database."
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "collections", description = "Collection management"),
        (name = "data", description = "Record insert and listing"),
        (name = "search", description = "Semantic nearest-text-match search")
    ),
    paths(
        handlers::health::health_check,
        handlers::collections::list_collections,
        handlers::collections::create_collection,
        handlers::collections::get_collection,
        handlers::collections::delete_collection,
        handlers::data::insert_data,
        handlers::data::list_data,
        handlers::search::search_collection
    ),
    components(
        schemas(
            CollectionAck,
            CollectionDetail,
            CollectionSummary,
            PropertyDetail,
            InsertDataRequest,
            InsertAck,
            RecordResponse,
            SearchResponse,
            SearchMatchResponse,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;

// ============================================================================
// Application State
// ============================================================================

/// Application state shared across handlers.
///
/// Holds the database connection handle established at startup. The handle
/// stays unset when the startup connection failed; handlers then answer 503
/// instead of touching the database.
pub struct AppState {
    db: Option<Arc<WeaviateClient>>,
}

impl AppState {
    /// State with an established database connection.
    pub fn ready(db: WeaviateClient) -> Self {
        Self {
            db: Some(Arc::new(db)),
        }
    }

    /// State without a database connection.
    pub fn unready() -> Self {
        Self { db: None }
    }

    /// Whether the database connection was established.
    pub fn is_ready(&self) -> bool {
        self.db.is_some()
    }

    pub(crate) fn db(&self) -> Result<&WeaviateClient, ApiError> {
        self.db.as_deref().ok_or(ApiError::Unavailable)
    }
}

// ============================================================================
// Router
// ============================================================================

/// Builds the API router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/collections", get(list_collections))
        .route(
            "/collection/{name}",
            get(get_collection)
                .post(create_collection)
                .put(insert_data)
                .delete(delete_collection),
        )
        .route("/search/{collection}", get(search_collection))
        .route("/data/{collection}", get(list_data))
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================
