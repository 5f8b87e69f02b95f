//! Client-side persistence for store-scoped state.
//!
//! Persistence follows `localStorage` semantics (string keys, string
//! values, infallible calls), expressed as the [`Storage`] trait so
//! embedders can plug in whatever backend fits their runtime.
//! [`MemoryStorage`] is the default.
//!
//! Four values are persisted per store, each under a key namespaced by the
//! store id (see [`StorageKeys`]):
//!
//! - the customer session token
//! - the active cart identifier
//! - the anonymous session identifier
//! - the wishlist (a JSON array of product identifiers)
//!
//! # Concurrency
//!
//! Keys are read and written synchronously with no cross-process
//! coordination. Two SDK instances sharing one backend can race on these
//! keys; last write wins.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::config::StoreId;

/// Length of the random portion of a generated anonymous session id.
const SESSION_ID_LEN: usize = 22;

/// Key-value persistence for store-scoped client state.
///
/// Implementations must be safe to call from multiple tasks. All methods
/// are infallible: a backend that can fail internally (disk, IPC) should
/// degrade to `None`/no-op rather than surface errors, matching how
/// browser storage behaves.
pub trait Storage: Send + Sync + std::fmt::Debug {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-memory [`Storage`] implementation.
///
/// State lives for the lifetime of the process. This is the default
/// backend used by [`StoreClient`](crate::StoreClient) when none is
/// supplied.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// The persisted keys for one store, namespaced by its identifier.
///
/// Namespacing allows several stores to share one storage backend (the
/// browser equivalent is several storefronts on one origin).
///
/// # Example
///
/// ```rust
/// use fast_store_sdk::storage::StorageKeys;
/// use fast_store_sdk::StoreId;
///
/// let keys = StorageKeys::new(&StoreId::new("demo-store").unwrap());
/// assert_eq!(keys.customer_token, "lfs_ctoken_demo-store");
/// assert_eq!(keys.cart, "lfs_cart_demo-store");
/// assert_eq!(keys.session, "lfs_sid_demo-store");
/// assert_eq!(keys.wishlist, "lfs_wish_demo-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key holding the customer session token.
    pub customer_token: String,
    /// Key holding the active cart identifier.
    pub cart: String,
    /// Key holding the anonymous session identifier.
    pub session: String,
    /// Key holding the wishlist JSON array.
    pub wishlist: String,
}

impl StorageKeys {
    /// Derives the key set for the given store.
    #[must_use]
    pub fn new(store_id: &StoreId) -> Self {
        let id = store_id.as_ref();
        Self {
            customer_token: format!("lfs_ctoken_{id}"),
            cart: format!("lfs_cart_{id}"),
            session: format!("lfs_sid_{id}"),
            wishlist: format!("lfs_wish_{id}"),
        }
    }
}

/// Returns the anonymous session id for this store, generating and
/// persisting one on first use.
///
/// The id associates a guest cart with this client before any
/// authentication happens. It is generated once per store and kept until
/// the backend forgets it.
pub fn session_id(storage: &dyn Storage, keys: &StorageKeys) -> String {
    if let Some(existing) = storage.get(&keys.session) {
        return existing;
    }
    let random: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect();
    let id = format!("sid_{random}");
    storage.set(&keys.session, &id);
    id
}

/// Generates a random password for transparently provisioned guest
/// customers: 32 hex characters from 16 random bytes.
#[must_use]
pub fn guest_password() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
