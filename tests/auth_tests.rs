//! Integration tests for authentication and the customer store.
//!
//! These tests verify token persistence on login, authenticated
//! follow-up requests, self-healing demotion on rejected tokens, and
//! best-effort logout.

use std::sync::Arc;

use fast_store_sdk::client::CUSTOMER_TOKEN_HEADER;
use fast_store_sdk::resources::Credentials;
use fast_store_sdk::storage::{MemoryStorage, Storage};
use fast_store_sdk::stores::CustomerState;
use fast_store_sdk::{HostUrl, StoreClient, StoreConfig, StoreId};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_KEY: &str = "lfs_ctoken_demo-store";

fn test_config(host: &str) -> StoreConfig {
    StoreConfig::builder()
        .store_id(StoreId::new("demo-store").unwrap())
        .host(HostUrl::new(host).unwrap())
        .build()
        .unwrap()
}

fn customer_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "pid": "cus_1",
        "email": "ana@example.com",
        "first_name": "Ana",
        "last_name": "Silva",
        "has_account": true
    })
}

#[tokio::test]
async fn test_login_persists_token_for_subsequent_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/stores/demo-store/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": {"token": "tok-abc", "customer": customer_json()}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/auth/me"))
        .and(header(CUSTOMER_TOKEN_HEADER, "tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": customer_json()
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    assert!(!client.auth().is_logged_in());

    client
        .auth()
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2!".to_string(),
        })
        .await
        .unwrap();

    // Token presence and an authenticated follow-up using only stored state.
    assert!(client.auth().is_logged_in());
    let me = client.auth().me().await.unwrap();
    assert_eq!(me.pid, "cus_1");
}

#[tokio::test]
async fn test_invalid_credentials_do_not_persist_a_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/stores/demo-store/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "ok": false,
            "error": {"code": "invalid_credentials", "message": "Email ou senha incorretos"}
        })))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let err = client
        .auth()
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.as_api().unwrap().code, "invalid_credentials");
    assert!(!client.auth().is_logged_in());
}

#[tokio::test]
async fn test_customer_store_login_transitions_to_logged_in() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/stores/demo-store/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": {"token": "tok-abc", "customer": customer_json()}
        })))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let store = client.customer_store();
    assert_eq!(store.state(), CustomerState::LoggedOut);

    let customer = store
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2!".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(customer.email, "ana@example.com");
    assert!(store.state().is_logged_in());
    assert_eq!(store.state().customer().unwrap().pid, "cus_1");
}

#[tokio::test]
async fn test_token_only_login_resolves_profile_through_me() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/stores/demo-store/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": {"token": "tok-abc"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/auth/me"))
        .and(header(CUSTOMER_TOKEN_HEADER, "tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": customer_json()
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let store = client.customer_store();

    let customer = store
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2!".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(customer.pid, "cus_1");
    assert_eq!(store.state().customer().unwrap().pid, "cus_1");
}

#[tokio::test]
async fn test_failed_profile_resolution_demotes_instead_of_half_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/stores/demo-store/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": {"token": "tok-abc"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/auth/me"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "ok": false,
            "error": {"code": "db_down", "message": "Profile unavailable"}
        })))
        .mount(&mock_server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    let client = StoreClient::with_storage(test_config(&mock_server.uri()), Arc::clone(&storage) as Arc<dyn Storage>);
    let store = client.customer_store();

    let err = store
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2!".to_string(),
        })
        .await
        .unwrap_err();

    // A failed login must not leave a logged-in store behind it.
    assert_eq!(err.as_api().unwrap().code, "db_down");
    assert_eq!(store.state(), CustomerState::LoggedOut);
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(!client.auth().is_logged_in());
}

#[tokio::test]
async fn test_fetch_demotes_and_clears_rejected_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "ok": false,
            "error": {"code": "unauthorized", "message": "Sessão expirada"}
        })))
        .mount(&mock_server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "stale-token");

    let client = StoreClient::with_storage(test_config(&mock_server.uri()), Arc::clone(&storage) as Arc<dyn Storage>);
    let store = client.customer_store();
    store.fetch().await;

    assert_eq!(store.state(), CustomerState::LoggedOut);
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(!client.auth().is_logged_in());
}

#[tokio::test]
async fn test_fetch_without_token_stays_logged_out_without_a_request() {
    let mock_server = MockServer::start().await;
    // No /auth/me mock mounted; a request would 404 and panic the
    // demotion assertion below if one were made with a valid token.

    let client = StoreClient::new(test_config(&mock_server.uri()));
    let store = client.customer_store();
    store.fetch().await;

    assert_eq!(store.state(), CustomerState::LoggedOut);
}

#[tokio::test]
async fn test_logout_clears_token_even_when_backend_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/stores/demo-store/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "tok-abc");

    let client = StoreClient::with_storage(test_config(&mock_server.uri()), Arc::clone(&storage) as Arc<dyn Storage>);
    let store = client.customer_store();
    store.logout().await;

    assert_eq!(store.state(), CustomerState::LoggedOut);
    assert!(storage.get(TOKEN_KEY).is_none());
}
