//! Record insert and listing handlers.

use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::resolve::resolve_collection;
use crate::types::{ErrorResponse, InsertAck, InsertDataRequest, RecordResponse};
use crate::AppState;

/// Insert a record into a collection.
#[utoipa::path(
    put,
    path = "/collection/{name}",
    tag = "data",
    params(
        ("name" = String, Path, description = "Collection name (any casing)")
    ),
    request_body = InsertDataRequest,
    responses(
        (status = 200, description = "Record inserted", body = InsertAck),
        (status = 400, description = "Missing data field", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 503, description = "Database connection not ready", body = ErrorResponse),
        (status = 500, description = "Upstream error", body = ErrorResponse)
    )
)]
pub async fn insert_data(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<InsertDataRequest>,
) -> Result<Json<InsertAck>, ApiError> {
    let data = req
        .data
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("No data provided".to_string()))?;

    let db = state.db()?;
    let collection = resolve_collection(db, &name).await?;

    // The schema listing can lag behind a concurrent delete; re-check under
    // the canonical name before writing.
    if !db.collection_exists(&collection.class).await? {
        return Err(ApiError::NotFound(format!("Collection {name} not found")));
    }

    let uuid = db.insert_object(&collection.class, &data).await?;
    Ok(Json(InsertAck {
        success: true,
        uuid,
    }))
}

/// List the records of a collection.
#[utoipa::path(
    get,
    path = "/data/{collection}",
    tag = "data",
    params(
        ("collection" = String, Path, description = "Collection name (any casing)")
    ),
    responses(
        (status = 200, description = "Records in the collection", body = [RecordResponse]),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 503, description = "Database connection not ready", body = ErrorResponse),
        (status = 500, description = "Upstream error", body = ErrorResponse)
    )
)]
pub async fn list_data(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let db = state.db()?;
    let resolved = resolve_collection(db, &collection).await?;
    let objects = db.list_objects(&resolved.class).await?;
    Ok(Json(objects.into_iter().map(Into::into).collect()))
}
