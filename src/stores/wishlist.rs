//! Reactive view over the persisted wishlist.

use crate::resources::Wishlist;

use super::Observable;

/// Mirrors the persisted wishlist and notifies subscribers on change.
#[derive(Debug)]
pub struct WishlistStore {
    wishlist: Wishlist,
    pids: Observable<Vec<String>>,
}

impl WishlistStore {
    pub(crate) fn new(wishlist: Wishlist) -> Self {
        let pids = Observable::new(wishlist.all());
        Self { wishlist, pids }
    }

    /// Returns the wishlisted product identifiers, in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<String> {
        self.pids.get()
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.pids.get().len()
    }

    /// Whether the product is wishlisted.
    #[must_use]
    pub fn has(&self, pid: &str) -> bool {
        self.pids.get().iter().any(|p| p == pid)
    }

    /// Registers a subscriber invoked on every membership change.
    pub fn subscribe(&self, listener: impl Fn(&Vec<String>) + Send + Sync + 'static) {
        self.pids.subscribe(listener);
    }

    /// Toggles membership. Returns `true` when the product was added.
    pub fn toggle(&self, pid: &str) -> bool {
        let added = self.wishlist.toggle(pid);
        self.pids.set(self.wishlist.all());
        added
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.wishlist.clear();
        self.pids.set(Vec::new());
    }
}
