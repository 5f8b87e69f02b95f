//! # Fast Store SDK
//!
//! A Rust client SDK for Fast Store storefront backends, providing
//! type-safe configuration, customer authentication, catalog and cart
//! access, and reactive client-side state for building storefront
//! frontends.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StoreConfig`] and [`StoreConfigBuilder`]
//! - Validated newtypes for store identifiers and host URLs
//! - An async HTTP client that unwraps the backend's response envelope
//!   and normalizes every failure into [`ClientError`]
//! - Domain API modules for auth, products, categories, collections,
//!   carts, orders and customers via [`resources`]
//! - Reactive stores for toasts, customer session, cart and wishlist
//!   via [`stores`]
//! - A four-step checkout flow with guest-account provisioning via
//!   [`checkout`]
//! - Postal-code address lookup, money/date formatting and debounced
//!   search helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_store_sdk::{HostUrl, StoreClient, StoreConfig, StoreId};
//!
//! // Create configuration using the builder pattern
//! let config = StoreConfig::builder()
//!     .store_id(StoreId::new("my-store").unwrap())
//!     .host(HostUrl::new("https://shop.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = StoreClient::new(config);
//! ```
//!
//! ## Loading Session State
//!
//! ```rust,ignore
//! // Validate any persisted token and resume or create the cart
//! client.boot().await?;
//!
//! let cart = client.cart_store();
//! cart.subscribe(|snapshot| {
//!     let count = snapshot.as_ref().map_or(0, |c| c.item_count());
//!     println!("{count} item(s) in cart");
//! });
//!
//! cart.add_item(42, 2).await?;
//! ```
//!
//! ## Browsing the Catalog
//!
//! ```rust,ignore
//! use fast_store_sdk::resources::ProductListParams;
//!
//! let page = client
//!     .products()
//!     .list(&ProductListParams {
//!         q: Some("camiseta".to_string()),
//!         ..ProductListParams::default()
//!     })
//!     .await?;
//!
//! for product in &page.data {
//!     println!("{} ({})", product.title, product.slug);
//! }
//! if let Some(cursor) = page.next_cursor() {
//!     // pass `cursor` back through `ProductListParams` for the next page
//! }
//! ```
//!
//! ## Checkout
//!
//! ```rust,ignore
//! use fast_store_sdk::checkout::PaymentMethod;
//!
//! let mut checkout = client.checkout();
//! checkout.prefill();
//! checkout.draft.email = "ana@example.com".to_string();
//! checkout.next(); // address
//! checkout.draft.address.postal_code = "01310-100".to_string();
//! checkout.lookup_postal_code().await;
//! checkout.next(); // payment
//! checkout.draft.payment_method = PaymentMethod::Pix;
//!
//! let order = checkout.submit().await?;
//! println!("order {} placed", order.order_number);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: every store and API module hangs off a
//!   [`StoreClient`] instance
//! - **Server-owned money**: amounts are integer minor-currency units
//!   computed by the backend; the client never recalculates totals
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod resources;
pub mod sdk;
pub mod search;
pub mod storage;
pub mod stores;

// Re-export public types at crate root for convenience
pub use client::{ApiError, ClientError, Page, PaginationMeta};
pub use config::{HostUrl, StoreConfig, StoreConfigBuilder, StoreId};
pub use error::ConfigError;
pub use sdk::StoreClient;
