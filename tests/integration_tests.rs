//! End-to-end tests wiring the full client together.

use std::sync::Arc;

use fast_store_sdk::storage::{MemoryStorage, Storage};
use fast_store_sdk::stores::CustomerState;
use fast_store_sdk::{HostUrl, StoreClient, StoreConfig, StoreId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(store_id: &str, host: &str) -> StoreConfig {
    StoreConfig::builder()
        .store_id(StoreId::new(store_id).unwrap())
        .host(HostUrl::new(host).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_boot_restores_session_and_cart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": {
                "id": 7,
                "pid": "cus_1",
                "email": "ana@example.com",
                "has_account": true
            }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/stores/demo-store/carts/cart_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "data": {
                "pid": "cart_1",
                "session_id": "sid_x",
                "status": "open",
                "currency": "BRL",
                "subtotal": 1990,
                "tax": 0,
                "shipping": 0,
                "total": 1990,
                "items": [{
                    "id": 11,
                    "pid": "item_1",
                    "variant_id": 42,
                    "quantity": 1,
                    "unit_price": 1990,
                    "total": 1990
                }]
            }
        })))
        .mount(&mock_server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    storage.set("lfs_ctoken_demo-store", "tok-abc");
    storage.set("lfs_cart_demo-store", "cart_1");

    let client = StoreClient::with_storage(
        test_config("demo-store", &mock_server.uri()),
        Arc::clone(&storage) as Arc<dyn Storage>,
    );
    client.boot().await.unwrap();

    assert!(client.customer_store().state().is_logged_in());
    assert_eq!(client.cart_store().item_count(), 1);
    assert_eq!(client.cart_store().total(), 1990);
}

#[tokio::test]
async fn test_stores_on_one_backend_do_not_share_persisted_state() {
    let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());

    let first = StoreClient::with_storage(
        test_config("store-one", "https://shop.example.com"),
        Arc::clone(&storage) as Arc<dyn Storage>,
    );
    let second = StoreClient::with_storage(
        test_config("store-two", "https://shop.example.com"),
        Arc::clone(&storage) as Arc<dyn Storage>,
    );

    first.wishlist().toggle("p1");
    assert!(first.wishlist().has("p1"));
    assert!(!second.wishlist().has("p1"));

    storage.set("lfs_ctoken_store-one", "tok-one");
    assert!(first.auth().is_logged_in());
    assert!(!second.auth().is_logged_in());
}

#[tokio::test]
async fn test_wishlist_survives_client_recreation() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let client = StoreClient::with_storage(
            test_config("demo-store", "https://shop.example.com"),
            Arc::clone(&storage) as Arc<dyn Storage>,
        );
        client.wishlist().toggle("p1");
        client.wishlist().toggle("p2");
    }

    let client = StoreClient::with_storage(
        test_config("demo-store", "https://shop.example.com"),
        Arc::clone(&storage) as Arc<dyn Storage>,
    );
    assert_eq!(
        client.wishlist().all(),
        vec!["p1".to_string(), "p2".to_string()]
    );
}

#[tokio::test]
async fn test_fresh_client_starts_logged_out() {
    let client = StoreClient::new(test_config("demo-store", "https://shop.example.com"));
    assert_eq!(client.customer_store().state(), CustomerState::LoggedOut);
    assert!(!client.auth().is_logged_in());
    assert_eq!(client.cart_store().item_count(), 0);
    assert!(client.wishlist().all().is_empty());
}

#[test]
fn test_export_and_import_urls_are_store_scoped() {
    let client = StoreClient::new(test_config("demo-store", "https://shop.example.com"));
    assert_eq!(
        client.products().export_csv_url(),
        "https://shop.example.com/api/stores/demo-store/products/export/csv"
    );
    assert_eq!(
        client.products().import_template_url(),
        "https://shop.example.com/api/stores/demo-store/products/import/template"
    );
}
