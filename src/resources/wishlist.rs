//! The wishlist: a purely client-side set of product identifiers.
//!
//! Persisted as an ordered JSON array under the store-scoped wishlist
//! key; there is no server representation. Corrupt persisted data
//! degrades to an empty list rather than erroring.

use std::sync::Arc;

use crate::storage::{Storage, StorageKeys};

/// Local wishlist operations.
#[derive(Clone, Debug)]
pub struct Wishlist {
    storage: Arc<dyn Storage>,
    key: String,
}

impl Wishlist {
    pub(crate) fn new(storage: Arc<dyn Storage>, keys: &StorageKeys) -> Self {
        Self {
            storage,
            key: keys.wishlist.clone(),
        }
    }

    /// Returns all wishlisted product identifiers, in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<String> {
        self.storage
            .get(&self.key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Whether the product is wishlisted.
    #[must_use]
    pub fn has(&self, pid: &str) -> bool {
        self.all().iter().any(|p| p == pid)
    }

    /// Toggles membership: adds the product if absent, removes it if
    /// present. Returns `true` when the product was added.
    ///
    /// Toggling is its own inverse: calling it twice with the same id
    /// restores the original membership.
    pub fn toggle(&self, pid: &str) -> bool {
        let mut pids = self.all();
        let added = if let Some(index) = pids.iter().position(|p| p == pid) {
            pids.remove(index);
            false
        } else {
            pids.push(pid.to_string());
            true
        };
        self.save(&pids);
        added
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.storage.remove(&self.key);
    }

    fn save(&self, pids: &[String]) {
        match serde_json::to_string(pids) {
            Ok(raw) => self.storage.set(&self.key, &raw),
            Err(err) => tracing::warn!("failed to serialize wishlist: {err}"),
        }
    }
}
