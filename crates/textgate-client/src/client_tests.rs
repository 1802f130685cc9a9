//! Tests for the Weaviate client against a stubbed upstream API.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

async fn mount_meta(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/meta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hostname": "http://[::]:8080",
            "version": "1.26.1"
        })))
        .mount(server)
        .await;
}

async fn connected_client(server: &MockServer) -> WeaviateClient {
    mount_meta(server).await;
    WeaviateClient::connect(WeaviateConfig::new(server.uri()))
        .await
        .expect("connect failed")
}

#[tokio::test]
async fn test_connect_probes_meta() {
    let server = MockServer::start().await;
    mount_meta(&server).await;

    let client = WeaviateClient::connect(WeaviateConfig::new(server.uri()))
        .await
        .expect("connect failed");
    let meta = client.meta().await.expect("meta failed");
    assert_eq!(meta.version, "1.26.1");
}

#[tokio::test]
async fn test_connect_fails_when_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/meta"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = WeaviateClient::connect(WeaviateConfig::new(server.uri())).await;
    assert!(matches!(result, Err(ClientError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_connect_forwards_vectorizer_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/meta"))
        .and(header("X-OpenAI-Api-Key", "sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1.26.1"})))
        .mount(&server)
        .await;

    let config = WeaviateConfig::new(server.uri()).with_api_key("sk-test");
    // Connect only succeeds if the header matcher was satisfied.
    WeaviateClient::connect(config).await.expect("connect failed");
}

#[tokio::test]
async fn test_list_collections() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classes": [
                {"class": "Notes", "properties": [{"name": "data", "dataType": ["text"]}]},
                {"class": "Recipes", "properties": []}
            ]
        })))
        .mount(&server)
        .await;

    let collections = client.list_collections().await.expect("list failed");
    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].class, "Notes");
    assert_eq!(collections[0].properties[0].name, "data");
}

#[tokio::test]
async fn test_list_collections_empty_schema() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"classes": []})))
        .mount(&server)
        .await;

    let collections = client.list_collections().await.expect("list failed");
    assert!(collections.is_empty());
}

#[tokio::test]
async fn test_get_collection_not_found() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/schema/Missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("could not find class Missing"),
        )
        .mount(&server)
        .await;

    let result = client.get_collection("Missing").await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));

    let exists = client.collection_exists("Missing").await.expect("exists failed");
    assert!(!exists);
}

#[tokio::test]
async fn test_collection_exists() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/schema/Notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"class": "Notes"})))
        .mount(&server)
        .await;

    assert!(client.collection_exists("Notes").await.expect("exists failed"));
}

#[tokio::test]
async fn test_create_collection_sends_text_schema() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/schema"))
        .and(body_partial_json(json!({
            "class": "Notes",
            "vectorizer": "text2vec-openai",
            "properties": [{"name": "data", "dataType": ["text"], "tokenization": "lowercase"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "class": "Notes",
            "properties": [{"name": "data", "dataType": ["text"]}]
        })))
        .mount(&server)
        .await;

    let created = client.create_collection("Notes").await.expect("create failed");
    assert_eq!(created.class, "Notes");
}

#[tokio::test]
async fn test_create_collection_conflict() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/schema"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": [{"message": "class name Notes already exists"}]
        })))
        .mount(&server)
        .await;

    let result = client.create_collection("Notes").await;
    assert!(matches!(result, Err(ClientError::AlreadyExists(_))));
}

#[tokio::test]
async fn test_delete_collection() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/v1/schema/Notes"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client.delete_collection("Notes").await.expect("delete failed");
}

#[tokio::test]
async fn test_insert_object() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/objects"))
        .and(body_partial_json(json!({
            "class": "Notes",
            "properties": {"data": "remember the milk"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5c9a1edc-0b92-4bb3-b991-fbb1d25391ec",
            "class": "Notes"
        })))
        .mount(&server)
        .await;

    let id = client
        .insert_object("Notes", "remember the milk")
        .await
        .expect("insert failed");
    assert_eq!(id.to_string(), "5c9a1edc-0b92-4bb3-b991-fbb1d25391ec");
}

#[tokio::test]
async fn test_list_objects() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/objects"))
        .and(query_param("class", "Notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {"id": "5c9a1edc-0b92-4bb3-b991-fbb1d25391ec",
                 "class": "Notes",
                 "properties": {"data": "hello"}}
            ]
        })))
        .mount(&server)
        .await;

    let objects = client.list_objects("Notes").await.expect("list failed");
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].properties.data.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_near_text_returns_matches() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "Get": {
                    "Notes": [
                        {"data": "groceries", "_additional": {"distance": 0.18}},
                        {"data": "shopping list", "_additional": {"distance": 0.25}}
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let matches = client
        .near_text("Notes", "things to buy", 20)
        .await
        .expect("search failed");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].data.as_deref(), Some("groceries"));
    assert_eq!(matches[0].distance, Some(0.18));
}

#[tokio::test]
async fn test_near_text_surfaces_graphql_errors() {
    let server = MockServer::start().await;
    let client = connected_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "vectorization failed"}]
        })))
        .mount(&server)
        .await;

    let result = client.near_text("Notes", "anything", 5).await;
    match result {
        Err(ClientError::Api { message, .. }) => {
            assert!(message.contains("vectorization failed"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
