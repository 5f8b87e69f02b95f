//! Client-side cart snapshot.
//!
//! Holds the most recent server cart and replaces it wholesale after
//! every mutation. Derived figures (item count, totals) are always read
//! from the snapshot, never accumulated locally, so the view can never
//! drift from what the backend would charge.

use crate::client::ClientError;
use crate::resources::{Cart, CartApi, NewCartItem};

use super::Observable;

/// Reactive wrapper around the server-owned cart.
#[derive(Debug)]
pub struct CartStore {
    api: CartApi,
    cart: Observable<Option<Cart>>,
}

impl CartStore {
    pub(crate) fn new(api: CartApi) -> Self {
        Self {
            api,
            cart: Observable::new(None),
        }
    }

    /// Returns the current snapshot, if a cart has been loaded.
    #[must_use]
    pub fn cart(&self) -> Option<Cart> {
        self.cart.get()
    }

    /// Sum of line item quantities in the snapshot.
    #[must_use]
    pub fn item_count(&self) -> i32 {
        self.cart.get().map_or(0, |cart| cart.item_count())
    }

    /// Grand total of the snapshot in minor currency units.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.cart.get().map_or(0, |cart| cart.total)
    }

    /// Registers a subscriber invoked on every snapshot replacement.
    pub fn subscribe(&self, listener: impl Fn(&Option<Cart>) + Send + Sync + 'static) {
        self.cart.subscribe(listener);
    }

    /// Loads the visitor's cart (resuming or creating one) into the store.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when neither resuming nor creating a cart
    /// succeeds; the snapshot is left untouched.
    pub async fn boot(&self) -> Result<Cart, ClientError> {
        let cart = self.api.get_or_create().await?;
        self.cart.set(Some(cart.clone()));
        Ok(cart)
    }

    /// Returns the loaded cart, booting first when none is loaded yet.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when booting fails.
    pub async fn ensure(&self) -> Result<Cart, ClientError> {
        match self.cart.get() {
            Some(cart) => Ok(cart),
            None => self.boot().await,
        }
    }

    /// Adds units of a variant and replaces the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation (e.g. out of stock) or
    /// transport failure; the snapshot is left untouched.
    pub async fn add_item(&self, variant_id: i64, quantity: i32) -> Result<Cart, ClientError> {
        let cart = self.ensure().await?;
        let updated = self
            .api
            .add_item(
                &cart.pid,
                &NewCartItem {
                    variant_id,
                    quantity,
                },
            )
            .await?;
        self.cart.set(Some(updated.clone()));
        Ok(updated)
    }

    /// Changes a line item's quantity and replaces the snapshot.
    ///
    /// A quantity of zero or less removes the line instead.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation or transport failure, or
    /// when no cart is loaded.
    pub async fn update_item(&self, item_id: i64, quantity: i32) -> Result<Cart, ClientError> {
        if quantity <= 0 {
            return self.remove_item(item_id).await;
        }
        let cart = self.ensure().await?;
        let updated = self.api.update_item(&cart.pid, item_id, quantity).await?;
        self.cart.set(Some(updated.clone()));
        Ok(updated)
    }

    /// Removes a line item and replaces the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, or when no cart is
    /// loaded.
    pub async fn remove_item(&self, item_id: i64) -> Result<Cart, ClientError> {
        let cart = self.ensure().await?;
        let updated = self.api.remove_item(&cart.pid, item_id).await?;
        self.cart.set(Some(updated.clone()));
        Ok(updated)
    }

    /// Drops the snapshot and the persisted cart identifier.
    ///
    /// Called after a successful order, whose creation consumed the cart
    /// server-side. The next [`ensure`](Self::ensure) starts a fresh one.
    pub fn clear(&self) {
        self.api.clear_saved();
        self.cart.set(None);
    }
}
