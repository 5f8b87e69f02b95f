//! The composition root tying transport, persistence, domain APIs and
//! reactive stores together for one storefront.

use std::sync::Arc;

use crate::checkout::Checkout;
use crate::client::{ClientError, HttpClient};
use crate::config::StoreConfig;
use crate::lookup::PostalLookup;
use crate::resources::{
    AuthApi, CartApi, CategoriesApi, CollectionsApi, CustomersApi, OrdersApi, ProductsApi, Wishlist,
};
use crate::storage::{MemoryStorage, Storage, StorageKeys};
use crate::stores::{CartStore, CustomerStore, ToastStore, WishlistStore};

/// Entry point for one storefront instance.
///
/// Construction wires every domain API and reactive store against a
/// shared transport and a store-scoped persistence namespace; state
/// lives in the stores, so clones of the contained `Arc`s observe the
/// same session. Two `StoreClient`s for different store identifiers
/// never share persisted keys.
#[derive(Debug)]
pub struct StoreClient {
    config: StoreConfig,
    auth: AuthApi,
    products: ProductsApi,
    categories: CategoriesApi,
    collections: CollectionsApi,
    cart: CartApi,
    orders: OrdersApi,
    customers: CustomersApi,
    lookup: PostalLookup,
    toasts: Arc<ToastStore>,
    customer_store: Arc<CustomerStore>,
    cart_store: Arc<CartStore>,
    wishlist_store: Arc<WishlistStore>,
}

impl StoreClient {
    /// Creates a client with in-memory persistence.
    ///
    /// Suitable for tests and short-lived tools; sessions and carts do
    /// not survive the process. Embedders with durable key-value
    /// storage should use [`with_storage`](Self::with_storage).
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_storage(config, Arc::new(MemoryStorage::new()))
    }

    /// Creates a client persisting through the given storage backend.
    #[must_use]
    pub fn with_storage(config: StoreConfig, storage: Arc<dyn Storage>) -> Self {
        let keys = StorageKeys::new(config.store_id());
        let http = Arc::new(HttpClient::new(&config, Arc::clone(&storage)));

        let auth = AuthApi::new(
            Arc::clone(&http),
            Arc::clone(&storage),
            keys.customer_token.clone(),
        );
        let cart_api = CartApi::new(Arc::clone(&http), Arc::clone(&storage), keys.clone());
        let wishlist = Wishlist::new(Arc::clone(&storage), &keys);

        Self {
            auth: auth.clone(),
            products: ProductsApi::new(Arc::clone(&http)),
            categories: CategoriesApi::new(Arc::clone(&http)),
            collections: CollectionsApi::new(Arc::clone(&http)),
            cart: cart_api.clone(),
            orders: OrdersApi::new(Arc::clone(&http)),
            customers: CustomersApi::new(Arc::clone(&http)),
            lookup: PostalLookup::default(),
            toasts: Arc::new(ToastStore::new()),
            customer_store: Arc::new(CustomerStore::new(auth)),
            cart_store: Arc::new(CartStore::new(cart_api)),
            wishlist_store: Arc::new(WishlistStore::new(wishlist)),
            config,
        }
    }

    /// Replaces the postal-lookup service endpoint.
    #[must_use]
    pub fn with_postal_lookup(mut self, lookup: PostalLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// The configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Authentication endpoints.
    #[must_use]
    pub const fn auth(&self) -> &AuthApi {
        &self.auth
    }

    /// Product catalog endpoints.
    #[must_use]
    pub const fn products(&self) -> &ProductsApi {
        &self.products
    }

    /// Category endpoints.
    #[must_use]
    pub const fn categories(&self) -> &CategoriesApi {
        &self.categories
    }

    /// Collection endpoints.
    #[must_use]
    pub const fn collections(&self) -> &CollectionsApi {
        &self.collections
    }

    /// Cart endpoints. Most callers want the reactive
    /// [`cart_store`](Self::cart_store) instead.
    #[must_use]
    pub const fn cart(&self) -> &CartApi {
        &self.cart
    }

    /// Order endpoints.
    #[must_use]
    pub const fn orders(&self) -> &OrdersApi {
        &self.orders
    }

    /// Customer profile and address endpoints.
    #[must_use]
    pub const fn customers(&self) -> &CustomersApi {
        &self.customers
    }

    /// Postal-code lookup service.
    #[must_use]
    pub const fn postal_lookup(&self) -> &PostalLookup {
        &self.lookup
    }

    /// Notification queue.
    #[must_use]
    pub fn toasts(&self) -> Arc<ToastStore> {
        Arc::clone(&self.toasts)
    }

    /// Authenticated-customer state.
    #[must_use]
    pub fn customer_store(&self) -> Arc<CustomerStore> {
        Arc::clone(&self.customer_store)
    }

    /// Reactive cart snapshot.
    #[must_use]
    pub fn cart_store(&self) -> Arc<CartStore> {
        Arc::clone(&self.cart_store)
    }

    /// Reactive wishlist.
    #[must_use]
    pub fn wishlist(&self) -> Arc<WishlistStore> {
        Arc::clone(&self.wishlist_store)
    }

    /// Loads initial session state: validates any persisted token and
    /// resumes or creates the visitor's cart.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the cart can neither be resumed nor
    /// created. A rejected auth token is not an error here; it demotes
    /// the customer store to logged out.
    pub async fn boot(&self) -> Result<(), ClientError> {
        self.customer_store.fetch().await;
        self.cart_store.boot().await?;
        Ok(())
    }

    /// Starts a checkout flow over the current cart and session.
    #[must_use]
    pub fn checkout(&self) -> Checkout {
        Checkout::new(
            self.customers.clone(),
            self.orders.clone(),
            Arc::clone(&self.customer_store),
            Arc::clone(&self.cart_store),
            self.lookup.clone(),
        )
    }
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreClient>();
};
