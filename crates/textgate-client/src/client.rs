//! The Weaviate HTTP client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use uuid::Uuid;

use crate::config::WeaviateConfig;
use crate::error::{classify_error, ClientError, Result};
use crate::schema::{
    near_text_query, CollectionSchema, DataObject, GraphQlRequest, GraphQlResponse, InsertedObject,
    MetaInfo, NewObject, ObjectListing, ObjectProperties, SchemaListing, SearchMatch,
};

/// Client for a single Weaviate instance.
///
/// The client is cheap to clone behind an `Arc` and safe to share across
/// concurrently running request handlers; `reqwest` manages its own
/// connection pool underneath.
pub struct WeaviateClient {
    http: Client,
    base_url: String,
}

impl WeaviateClient {
    /// Connects to the configured Weaviate instance.
    ///
    /// Builds the HTTP client (timeouts, vectorizer API-key header) and
    /// probes `GET /v1/meta` so that a misconfigured or unreachable
    /// instance is reported as an error at startup instead of on the first
    /// request. Logs the upstream version on success.
    pub async fn connect(config: WeaviateConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|_| ClientError::Config("API key is not a valid header value".into()))?;
            headers.insert("X-OpenAI-Api-Key", value);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .default_headers(headers)
            .build()?;

        let client = Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        };

        let meta = client.meta().await?;
        tracing::info!(version = %meta.version, "connected to Weaviate");

        Ok(client)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads the upstream server metadata.
    pub async fn meta(&self) -> Result<MetaInfo> {
        let response = self.http.get(self.url("/v1/meta")).send().await?;
        Self::parse_json(Self::check(response).await?, "meta").await
    }

    /// Lists all collections known to the upstream schema.
    pub async fn list_collections(&self) -> Result<Vec<CollectionSchema>> {
        let response = self.http.get(self.url("/v1/schema")).send().await?;
        let listing: SchemaListing =
            Self::parse_json(Self::check(response).await?, "schema listing").await?;
        Ok(listing.classes)
    }

    /// Fetches one collection schema by its exact name.
    pub async fn get_collection(&self, name: &str) -> Result<CollectionSchema> {
        let response = self
            .http
            .get(self.url(&format!("/v1/schema/{name}")))
            .send()
            .await?;
        Self::parse_json(Self::check(response).await?, "collection schema").await
    }

    /// Checks whether a collection exists under its exact name.
    pub async fn collection_exists(&self, name: &str) -> Result<bool> {
        match self.get_collection(name).await {
            Ok(_) => Ok(true),
            Err(ClientError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Creates a gateway text collection (see
    /// [`CollectionSchema::text_collection`]).
    pub async fn create_collection(&self, name: &str) -> Result<CollectionSchema> {
        let body = CollectionSchema::text_collection(name);
        let response = self
            .http
            .post(self.url("/v1/schema"))
            .json(&body)
            .send()
            .await?;
        Self::parse_json(Self::check(response).await?, "created collection").await
    }

    /// Deletes a collection by its exact name.
    pub async fn delete_collection(&self, name: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/v1/schema/{name}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Inserts one record into a collection and returns its object ID.
    pub async fn insert_object(&self, collection: &str, data: &str) -> Result<Uuid> {
        let body = NewObject {
            class: collection.to_string(),
            properties: ObjectProperties {
                data: Some(data.to_string()),
            },
        };
        let response = self
            .http
            .post(self.url("/v1/objects"))
            .json(&body)
            .send()
            .await?;
        let inserted: InsertedObject =
            Self::parse_json(Self::check(response).await?, "inserted object").await?;
        Ok(inserted.id)
    }

    /// Lists the stored records of a collection.
    pub async fn list_objects(&self, collection: &str) -> Result<Vec<DataObject>> {
        let response = self
            .http
            .get(self.url("/v1/objects"))
            .query(&[("class", collection)])
            .send()
            .await?;
        let listing: ObjectListing =
            Self::parse_json(Self::check(response).await?, "object listing").await?;
        Ok(listing.objects)
    }

    /// Runs a nearest-text-match query against a collection.
    ///
    /// The collection name must be the exact (resolved) upstream name, since
    /// it doubles as the GraphQL type name in the query.
    pub async fn near_text(
        &self,
        collection: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchMatch>> {
        let body = GraphQlRequest {
            query: near_text_query(collection, query, limit),
        };
        let response = self
            .http
            .post(self.url("/v1/graphql"))
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let graphql: GraphQlResponse =
            Self::parse_json(Self::check(response).await?, "search response").await?;

        if let Some(errors) = graphql.errors {
            if !errors.is_empty() {
                let message = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(ClientError::Api { status, message });
            }
        }

        let mut data = graphql
            .data
            .ok_or_else(|| ClientError::InvalidResponse("search response missing data".into()))?;

        let matches = data.get.remove(collection).ok_or_else(|| {
            ClientError::InvalidResponse(format!("search response missing class {collection}"))
        })?;

        Ok(matches.into_iter().map(SearchMatch::from).collect())
    }

    /// Converts a non-success response into a [`ClientError`], reading the
    /// error body for classification.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(classify_error(status.as_u16(), message))
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("failed to parse {context}: {e}")))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
