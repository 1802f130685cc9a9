//! Nearest-text-match search handler.

use axum::extract::{Path, Query, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::resolve::resolve_collection;
use crate::types::{ErrorResponse, SearchParams, SearchResponse};
use crate::AppState;

/// Search a collection for records semantically close to `search`.
#[utoipa::path(
    get,
    path = "/search/{collection}",
    tag = "search",
    params(
        ("collection" = String, Path, description = "Collection name (any casing)"),
        ("search" = String, Query, description = "Text to match"),
        ("limit" = Option<usize>, Query, description = "Maximum number of matches (default 20)")
    ),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Missing search text", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 503, description = "Database connection not ready", body = ErrorResponse),
        (status = 500, description = "Upstream error", body = ErrorResponse)
    )
)]
pub async fn search_collection(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let search = params
        .search
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("No search query provided".to_string()))?;

    let db = state.db()?;
    let resolved = resolve_collection(db, &collection).await?;
    let matches = db.near_text(&resolved.class, &search, params.limit).await?;

    Ok(Json(SearchResponse {
        matches: matches.into_iter().map(Into::into).collect(),
    }))
}
