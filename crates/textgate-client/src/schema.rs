//! Wire types for the Weaviate REST and GraphQL APIs.
//!
//! Field names follow the upstream JSON contract (camelCase), so most types
//! carry serde renames rather than idiomatic Rust field names on the wire.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Server metadata returned by `GET /v1/meta`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaInfo {
    /// Upstream server version.
    pub version: String,
    /// Hostname reported by the upstream server.
    #[serde(default)]
    pub hostname: Option<String>,
}

/// A collection (Weaviate class) schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSchema {
    /// Collection name. Weaviate capitalizes the first letter on creation.
    pub class: String,
    /// Named properties of the collection.
    #[serde(default)]
    pub properties: Vec<PropertySchema>,
    /// Vectorizer module name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectorizer: Option<String>,
    /// Module configuration (vectorizer and generative modules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_config: Option<serde_json::Value>,
    /// Collection identifier, when the upstream provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A single property of a collection schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    /// Property name.
    pub name: String,
    /// Property data types (Weaviate models this as a list).
    pub data_type: Vec<String>,
    /// Tokenization strategy for text properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenization: Option<String>,
    /// Per-property module configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_config: Option<serde_json::Value>,
}

impl CollectionSchema {
    /// Builds the schema for a gateway text collection: a single vectorized
    /// `data` property with lowercase tokenization, embedded via the OpenAI
    /// vectorizer, with the OpenAI generative module enabled.
    pub fn text_collection(name: &str) -> Self {
        Self {
            class: name.to_string(),
            properties: vec![PropertySchema {
                name: "data".to_string(),
                data_type: vec!["text".to_string()],
                tokenization: Some("lowercase".to_string()),
                module_config: Some(serde_json::json!({
                    "text2vec-openai": { "vectorizePropertyName": true }
                })),
            }],
            vectorizer: Some("text2vec-openai".to_string()),
            module_config: Some(serde_json::json!({
                "text2vec-openai": {},
                "generative-openai": {}
            })),
            id: None,
        }
    }
}

/// Response of `GET /v1/schema`.
#[derive(Debug, Deserialize)]
pub(crate) struct SchemaListing {
    #[serde(default)]
    pub classes: Vec<CollectionSchema>,
}

/// A stored object as returned by `GET /v1/objects`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataObject {
    /// Object identifier.
    pub id: Uuid,
    /// Owning collection name.
    #[serde(default)]
    pub class: Option<String>,
    /// Object properties.
    #[serde(default)]
    pub properties: ObjectProperties,
}

/// Properties of a gateway record. The gateway only writes the single
/// `data` text field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectProperties {
    /// The record's text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Request body for `POST /v1/objects`.
#[derive(Debug, Serialize)]
pub(crate) struct NewObject {
    pub class: String,
    pub properties: ObjectProperties,
}

/// Response body for `POST /v1/objects`.
#[derive(Debug, Deserialize)]
pub(crate) struct InsertedObject {
    pub id: Uuid,
}

/// Response body for `GET /v1/objects`.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectListing {
    #[serde(default)]
    pub objects: Vec<DataObject>,
}

/// One hit of a nearest-text-match query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMatch {
    /// Text content of the matched record.
    pub data: Option<String>,
    /// Semantic distance to the query (smaller is closer).
    pub distance: Option<f32>,
}

/// Request body for `POST /v1/graphql`.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest {
    pub query: String,
}

/// Response envelope for `POST /v1/graphql`.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<GraphQlData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlData {
    #[serde(rename = "Get", default)]
    pub get: HashMap<String, Vec<RawMatch>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMatch {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(rename = "_additional", default)]
    pub additional: Option<AdditionalFields>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AdditionalFields {
    #[serde(default)]
    pub distance: Option<f32>,
}

impl From<RawMatch> for SearchMatch {
    fn from(raw: RawMatch) -> Self {
        Self {
            data: raw.data,
            distance: raw.additional.and_then(|a| a.distance),
        }
    }
}

/// Builds the GraphQL `Get` query for a nearest-text-match search.
///
/// The concept string is JSON-escaped so user input cannot break out of the
/// query literal.
pub(crate) fn near_text_query(class: &str, concept: &str, limit: usize) -> String {
    let concept = serde_json::Value::String(concept.to_string());
    format!(
        "{{ Get {{ {class}(limit: {limit}, nearText: {{ concepts: [{concept}] }}) \
         {{ data _additional {{ distance }} }} }} }}"
    )
}
