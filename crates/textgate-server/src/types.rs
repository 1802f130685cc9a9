//! Request/Response types for the textgate REST API.
//!
//! Responses that expose upstream schema details keep the upstream's
//! camelCase field names so the gateway is a transparent projection.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use textgate_client::{CollectionSchema, DataObject, PropertySchema, SearchMatch};

// ============================================================================
// Collection Types
// ============================================================================

/// Acknowledgement for a collection create/delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionAck {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The collection's canonical (upstream) name.
    #[schema(example = "Notes")]
    pub name: String,
}

/// A collection's name and property projection.
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionDetail {
    /// Collection name.
    #[schema(example = "Notes")]
    pub name: String,
    /// Properties declared on the collection.
    pub properties: Vec<PropertyDetail>,
}

/// One entry of the collection listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionSummary {
    /// Collection name.
    pub name: String,
    /// Properties declared on the collection.
    pub properties: Vec<PropertyDetail>,
    /// Collection identifier, when the upstream reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Projection of an upstream property schema.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    /// Property name.
    #[schema(example = "data")]
    pub name: String,
    /// Property data types.
    #[schema(example = json!(["text"]))]
    pub data_type: Vec<String>,
    /// Tokenization strategy, for text properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenization: Option<String>,
}

impl From<PropertySchema> for PropertyDetail {
    fn from(property: PropertySchema) -> Self {
        Self {
            name: property.name,
            data_type: property.data_type,
            tokenization: property.tokenization,
        }
    }
}

impl From<CollectionSchema> for CollectionDetail {
    fn from(schema: CollectionSchema) -> Self {
        Self {
            name: schema.class,
            properties: schema.properties.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CollectionSchema> for CollectionSummary {
    fn from(schema: CollectionSchema) -> Self {
        Self {
            name: schema.class,
            properties: schema.properties.into_iter().map(Into::into).collect(),
            id: schema.id,
        }
    }
}

// ============================================================================
// Data Types
// ============================================================================

/// Request body for inserting a record.
#[derive(Debug, Deserialize, ToSchema)]
pub struct InsertDataRequest {
    /// Text content of the record.
    #[schema(example = "remember the milk")]
    pub data: Option<String>,
}

/// Acknowledgement for an insert, carrying the new object's ID.
#[derive(Debug, Serialize, ToSchema)]
pub struct InsertAck {
    /// Whether the insert succeeded.
    pub success: bool,
    /// Upstream ID of the inserted record.
    pub uuid: Uuid,
}

/// A stored record.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordResponse {
    /// Upstream object ID.
    pub id: Uuid,
    /// Text content of the record.
    pub data: Option<String>,
}

impl From<DataObject> for RecordResponse {
    fn from(object: DataObject) -> Self {
        Self {
            id: object.id,
            data: object.properties.data,
        }
    }
}

// ============================================================================
// Search Types
// ============================================================================

/// Query parameters of the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Text to match against the collection.
    pub search: Option<String>,
    /// Maximum number of matches to return.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

pub(crate) fn default_limit() -> usize {
    20
}

/// Response of a semantic search.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    /// Matches ranked by distance.
    pub matches: Vec<SearchMatchResponse>,
}

/// A single search match.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchMatchResponse {
    /// Text content of the matched record.
    #[schema(example = "remember the milk")]
    pub data: Option<String>,
    /// Semantic distance to the query (smaller is closer).
    #[schema(example = 0.18)]
    pub distance: Option<f32>,
}

impl From<SearchMatch> for SearchMatchResponse {
    fn from(m: SearchMatch) -> Self {
        Self {
            data: m.data,
            distance: m.distance,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}
