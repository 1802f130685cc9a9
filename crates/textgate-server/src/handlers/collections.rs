//! Collection management handlers.

use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::resolve::resolve_collection;
use crate::types::{CollectionAck, CollectionDetail, CollectionSummary, ErrorResponse};
use crate::AppState;

/// Create a collection.
///
/// The collection gets a single vectorized `data` text property; embedding
/// and generative support are delegated to the upstream OpenAI modules.
#[utoipa::path(
    post,
    path = "/collection/{name}",
    tag = "collections",
    params(
        ("name" = String, Path, description = "Collection name")
    ),
    responses(
        (status = 200, description = "Collection created", body = CollectionAck),
        (status = 400, description = "Collection already exists", body = ErrorResponse),
        (status = 503, description = "Database connection not ready", body = ErrorResponse),
        (status = 500, description = "Upstream error", body = ErrorResponse)
    )
)]
pub async fn create_collection(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CollectionAck>, ApiError> {
    let db = state.db()?;
    let created = db.create_collection(&name).await?;
    Ok(Json(CollectionAck {
        success: true,
        name: created.class,
    }))
}

/// Delete a collection, resolving its name case-insensitively.
#[utoipa::path(
    delete,
    path = "/collection/{name}",
    tag = "collections",
    params(
        ("name" = String, Path, description = "Collection name (any casing)")
    ),
    responses(
        (status = 200, description = "Collection deleted", body = CollectionAck),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 503, description = "Database connection not ready", body = ErrorResponse),
        (status = 500, description = "Upstream error", body = ErrorResponse)
    )
)]
pub async fn delete_collection(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CollectionAck>, ApiError> {
    let db = state.db()?;
    let collection = resolve_collection(db, &name).await?;
    db.delete_collection(&collection.class).await?;
    Ok(Json(CollectionAck {
        success: true,
        name: collection.class,
    }))
}

/// Get a collection's name and properties.
#[utoipa::path(
    get,
    path = "/collection/{name}",
    tag = "collections",
    params(
        ("name" = String, Path, description = "Collection name (any casing)")
    ),
    responses(
        (status = 200, description = "Collection details", body = CollectionDetail),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 503, description = "Database connection not ready", body = ErrorResponse),
        (status = 500, description = "Upstream error", body = ErrorResponse)
    )
)]
pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CollectionDetail>, ApiError> {
    let db = state.db()?;
    let collection = resolve_collection(db, &name).await?;
    Ok(Json(collection.into()))
}

/// List all collections.
#[utoipa::path(
    get,
    path = "/collections",
    tag = "collections",
    responses(
        (status = 200, description = "List of collections", body = [CollectionSummary]),
        (status = 503, description = "Database connection not ready", body = ErrorResponse),
        (status = 500, description = "Upstream error", body = ErrorResponse)
    )
)]
pub async fn list_collections(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CollectionSummary>>, ApiError> {
    let db = state.db()?;
    let collections = db.list_collections().await?;
    Ok(Json(collections.into_iter().map(Into::into).collect()))
}
