//! Common test utilities for textgate-server integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use textgate_client::{WeaviateClient, WeaviateConfig};
use textgate_server::{router, AppState};

/// Mounts the `/v1/meta` stub that the client probes at connect time.
pub async fn mount_meta(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/meta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hostname": "http://[::]:8080",
            "version": "1.26.1"
        })))
        .mount(server)
        .await;
}

/// Mounts a `GET /v1/schema` stub listing the given classes.
pub async fn mount_schema_listing(server: &MockServer, classes: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "classes": classes })))
        .mount(server)
        .await;
}

/// Mounts a `GET /v1/schema/{class}` stub returning the given schema.
pub async fn mount_collection(server: &MockServer, class: &str, schema: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/schema/{class}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(schema))
        .mount(server)
        .await;
}

/// A collection schema body with the gateway's single `data` property.
pub fn text_collection(class: &str) -> Value {
    json!({
        "class": class,
        "properties": [
            {"name": "data", "dataType": ["text"], "tokenization": "lowercase"}
        ]
    })
}

/// Helper to create the app router against a stubbed Weaviate instance.
pub async fn create_test_app(server: &MockServer) -> Router {
    mount_meta(server).await;
    let client = WeaviateClient::connect(WeaviateConfig::new(server.uri()))
        .await
        .expect("Failed to connect to stub Weaviate");
    router(Arc::new(AppState::ready(client)))
}

/// Helper to create the app router without a database connection.
pub fn create_unready_app() -> Router {
    router(Arc::new(AppState::unready()))
}

/// Sends one request through the router and returns status + JSON body.
pub async fn send(
    app: Router,
    http_method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(http_method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Invalid JSON")
    };
    (status, json)
}
