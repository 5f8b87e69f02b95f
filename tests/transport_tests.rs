//! Integration tests for the HTTP transport layer.
//!
//! These tests verify base path construction, session token header
//! attachment, envelope decoding and the normalization of every failure
//! shape into `ClientError`.

use std::sync::Arc;

use fast_store_sdk::client::{ClientError, CUSTOMER_TOKEN_HEADER, PARSE_ERROR_CODE};
use fast_store_sdk::storage::{MemoryStorage, Storage};
use fast_store_sdk::{HostUrl, StoreClient, StoreConfig, StoreId};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(host: &str) -> StoreConfig {
    StoreConfig::builder()
        .store_id(StoreId::new("demo-store").unwrap())
        .host(HostUrl::new(host).unwrap())
        .build()
        .unwrap()
}

fn category_json(pid: &str) -> serde_json::Value {
    serde_json::json!({
        "pid": pid,
        "name": "Shoes",
        "slug": "shoes",
        "sort_order": 1
    })
}

#[tokio::test]
async fn test_requests_hit_the_store_scoped_base_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/categories/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": category_json("c1")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let category = client.categories().get("c1").await.unwrap();
    assert_eq!(category.pid, "c1");
    assert_eq!(category.name, "Shoes");
}

#[tokio::test]
async fn test_token_header_attached_when_persisted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/categories/c1"))
        .and(header(CUSTOMER_TOKEN_HEADER, "tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": category_json("c1")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    storage.set("lfs_ctoken_demo-store", "tok-123");

    let client = StoreClient::with_storage(test_config(&mock_server.uri()), storage);
    client.categories().get("c1").await.unwrap();
}

#[tokio::test]
async fn test_error_envelope_surfaces_code_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/categories/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "ok": false,
            "error": {"code": "not_found", "message": "Category not found"}
        })))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let err = client.categories().get("nope").await.unwrap_err();

    let api = err.as_api().expect("expected an application error");
    assert_eq!(api.code, "not_found");
    assert_eq!(api.message, "Category not found");
    assert_eq!(err.user_message("fallback"), "Category not found");
}

#[tokio::test]
async fn test_ok_false_on_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/categories/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": false,
            "error": {"code": "unavailable", "message": "Try again"}
        })))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let err = client.categories().get("c1").await.unwrap_err();
    assert_eq!(err.as_api().unwrap().code, "unavailable");
}

#[tokio::test]
async fn test_non_json_success_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/categories/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let err = client.categories().get("c1").await.unwrap_err();
    assert_eq!(err.as_api().unwrap().code, PARSE_ERROR_CODE);
}

#[tokio::test]
async fn test_non_json_failure_body_falls_back_to_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/categories/c1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let err = client.categories().get("c1").await.unwrap_err();

    let api = err.as_api().unwrap();
    assert_eq!(api.code, "500");
    assert_eq!(err.user_message("fallback"), "Server error");
}

#[tokio::test]
async fn test_network_failure_maps_to_network_error() {
    // Nothing listens on this port.
    let client = StoreClient::new(test_config("http://127.0.0.1:9"));
    let err = client.categories().get("c1").await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.as_api().is_none());
    assert_eq!(err.user_message("fallback"), "fallback");
}

#[tokio::test]
async fn test_paginated_listing_decodes_meta() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/products"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": [
                {"pid": "p1", "title": "Camiseta", "slug": "camiseta"},
                {"pid": "p2", "title": "Caneca", "slug": "caneca"}
            ],
            "meta": {"cursor": "abc", "has_more": true, "count": 2}
        })))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let page = client
        .products()
        .list(&fast_store_sdk::resources::ProductListParams {
            status: Some("active".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert!(page.has_more());
    assert_eq!(page.next_cursor(), Some("abc"));
}

#[tokio::test]
async fn test_paginated_listing_failure_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/products"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "ok": false,
            "error": {"code": "db_down", "message": "Database unavailable"}
        })))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let result = client
        .products()
        .list(&fast_store_sdk::resources::ProductListParams::default())
        .await;

    // No silent empty page on error.
    assert_eq!(result.unwrap_err().as_api().unwrap().code, "db_down");
}
