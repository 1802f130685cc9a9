//! Case-insensitive collection resolution.
//!
//! The upstream schema API only offers exact-name lookups, while the gateway
//! accepts any casing. Resolution therefore lists all collections and scans
//! for a case-insensitive match, then re-fetches the live schema under the
//! matched canonical name. O(n) in the collection count per call, which is
//! acceptable for the low-volume administrative traffic this API serves.

use textgate_client::{CollectionSchema, WeaviateClient};

use crate::error::ApiError;

/// Finds the first collection whose name matches `name` case-insensitively,
/// in listing order.
///
/// The upstream rejects duplicate case-variant names, so ties cannot occur
/// in practice; listing order decides if they ever did.
pub(crate) fn match_collection<'a>(
    collections: &'a [CollectionSchema],
    name: &str,
) -> Option<&'a CollectionSchema> {
    let wanted = name.to_lowercase();
    collections.iter().find(|c| c.class.to_lowercase() == wanted)
}

/// Resolves a user-supplied collection name to its live upstream schema.
pub(crate) async fn resolve_collection(
    db: &WeaviateClient,
    name: &str,
) -> Result<CollectionSchema, ApiError> {
    let collections = db.list_collections().await?;
    let Some(found) = match_collection(&collections, name) else {
        return Err(ApiError::NotFound(format!("Collection {name} not found")));
    };
    Ok(db.get_collection(&found.class).await?)
}
