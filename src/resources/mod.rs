//! Domain API modules, one per storefront resource.
//!
//! Each module is a thin, stateless mapping from a domain operation to one
//! [`HttpClient`](crate::client::HttpClient) call plus minimal
//! post-processing. Errors propagate unchanged as
//! [`ClientError`](crate::client::ClientError); the only local state any
//! module touches is the store-scoped persistence (session token, cart id,
//! wishlist).
//!
//! - [`auth`]: customer authentication, token persistence
//! - [`products`]: product catalog, variants and tiered prices
//! - [`categories`], [`collections`]: taxonomy
//! - [`cart`]: guest cart lifecycle and item mutation
//! - [`orders`]: order creation and history
//! - [`customers`]: profile and addresses
//! - [`wishlist`]: purely local favorites list

pub mod auth;
pub mod cart;
pub mod categories;
pub mod collections;
pub mod customers;
pub mod orders;
pub mod products;
pub mod wishlist;

pub use auth::{AuthApi, AuthPayload, Credentials, Registration};
pub use cart::{Cart, CartApi, CartItem, NewCartItem};
pub use categories::{CategoriesApi, Category, CategoryListParams};
pub use collections::{Collection, CollectionsApi};
pub use customers::{Address, Customer, CustomerUpdate, CustomersApi, NewAddress};
pub use orders::{Order, OrderDraft, OrderItem, OrdersApi};
pub use products::{Price, Product, ProductImage, ProductListParams, ProductsApi, Variant};
pub use wishlist::Wishlist;

/// Appends `value` to `query` under `key`, omitting `None` and
/// empty-string values so they never reach the wire.
pub(crate) fn push_param(query: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            query.push((key, value.to_string()));
        }
    }
}
