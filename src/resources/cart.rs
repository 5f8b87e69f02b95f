//! Guest cart lifecycle and item mutation.
//!
//! The cart is a server-owned aggregate; the client persists only its
//! public identifier. Every mutation returns the server's updated cart,
//! which is the only source of truth for totals — a locally mutated total
//! is never trusted.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::{ClientError, HttpClient};
use crate::storage::{session_id, Storage, StorageKeys};

/// A line item in a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Internal numeric key, used in item update/remove request paths.
    #[serde(default)]
    pub id: i64,
    /// Public identifier.
    pub pid: String,
    /// Internal key of the variant this line references.
    pub variant_id: i64,
    /// Units of the variant.
    pub quantity: i32,
    /// Unit price in minor currency units, computed server-side.
    pub unit_price: i64,
    /// Line total in minor currency units, computed server-side.
    pub total: i64,
    /// Display title of the variant's product, when the backend joins it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The server-owned cart aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    /// Public identifier, persisted client-side to resume the cart.
    pub pid: String,
    /// The anonymous session id this cart is associated with.
    #[serde(default)]
    pub session_id: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: String,
    /// Contact email, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,
    /// Item subtotal in minor currency units.
    #[serde(default)]
    pub subtotal: i64,
    /// Tax in minor currency units.
    #[serde(default)]
    pub tax: i64,
    /// Shipping in minor currency units.
    #[serde(default)]
    pub shipping: i64,
    /// Grand total in minor currency units, always computed server-side.
    #[serde(default)]
    pub total: i64,
    /// Line items, when the backend includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CartItem>>,
}

impl Cart {
    /// Sum of line item quantities. Derived, never stored.
    #[must_use]
    pub fn item_count(&self) -> i32 {
        self.items
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|item| item.quantity)
            .sum()
    }
}

/// Payload for adding a line item.
#[derive(Debug, Clone, Serialize)]
pub struct NewCartItem {
    /// Internal key of the variant to add.
    pub variant_id: i64,
    /// Units to add.
    pub quantity: i32,
}

#[derive(Serialize)]
struct QuantityUpdate {
    quantity: i32,
}

/// Cart operations.
#[derive(Clone, Debug)]
pub struct CartApi {
    http: Arc<HttpClient>,
    storage: Arc<dyn Storage>,
    keys: StorageKeys,
}

impl CartApi {
    pub(crate) fn new(http: Arc<HttpClient>, storage: Arc<dyn Storage>, keys: StorageKeys) -> Self {
        Self {
            http,
            storage,
            keys,
        }
    }

    /// Resumes the persisted cart or creates a new one.
    ///
    /// Reads the persisted cart identifier and tries to fetch that cart;
    /// on any failure the stale identifier is discarded and a new cart is
    /// created tied to the anonymous session id. Creation falls back to a
    /// lookup by session id when the create call itself fails (the
    /// backend may already hold an open cart for this session). The
    /// resulting identifier is persisted.
    ///
    /// Idempotent absent intervening mutation: two sequential calls
    /// return a cart with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] only when both creation and the
    /// session-id lookup fail.
    pub async fn get_or_create(&self) -> Result<Cart, ClientError> {
        if let Some(saved) = self.storage.get(&self.keys.cart) {
            match self.get(&saved).await {
                Ok(cart) => return Ok(cart),
                Err(err) => {
                    tracing::warn!(cart = %saved, "discarding stale cart identifier: {err}");
                    self.storage.remove(&self.keys.cart);
                }
            }
        }

        let sid = session_id(self.storage.as_ref(), &self.keys);
        let query = [("session_id", sid)];
        let cart: Cart = match self
            .http
            .post_query("/carts", &query, &serde_json::json!({}))
            .await
        {
            Ok(cart) => cart,
            Err(err) => {
                tracing::debug!("cart creation failed, looking up by session id: {err}");
                self.http.get_query("/carts", &query).await?
            }
        };

        self.storage.set(&self.keys.cart, &cart.pid);
        Ok(cart)
    }

    /// Fetches a cart by its public identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the cart does not exist.
    pub async fn get(&self, pid: &str) -> Result<Cart, ClientError> {
        self.http.get(&format!("/carts/{pid}")).await
    }

    /// Adds a line item and returns the server's updated cart.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation (e.g. out of stock) or
    /// transport failure.
    pub async fn add_item(&self, cart_pid: &str, item: &NewCartItem) -> Result<Cart, ClientError> {
        self.http
            .post(&format!("/carts/{cart_pid}/items"), item)
            .await
    }

    /// Changes a line item's quantity and returns the server's updated cart.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation or transport failure.
    pub async fn update_item(
        &self,
        cart_pid: &str,
        item_id: i64,
        quantity: i32,
    ) -> Result<Cart, ClientError> {
        self.http
            .put(
                &format!("/carts/{cart_pid}/items/{item_id}"),
                &QuantityUpdate { quantity },
            )
            .await
    }

    /// Removes a line item and returns the server's updated cart.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn remove_item(&self, cart_pid: &str, item_id: i64) -> Result<Cart, ClientError> {
        self.http
            .delete(&format!("/carts/{cart_pid}/items/{item_id}"))
            .await
    }

    /// Forgets the persisted cart identifier (used after order creation).
    pub fn clear_saved(&self) {
        self.storage.remove(&self.keys.cart);
    }

    /// Returns the persisted cart identifier, if any.
    #[must_use]
    pub fn saved_pid(&self) -> Option<String> {
        self.storage.get(&self.keys.cart)
    }
}
