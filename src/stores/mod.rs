//! Observable state containers ("reactive stores").
//!
//! Each store owns one piece of client-side state, mutated only through
//! its methods; every mutation notifies registered subscribers with the
//! new state. There are no ambient globals: the stores are owned by the
//! composition root ([`StoreClient`](crate::StoreClient)) and handed to
//! view code explicitly.
//!
//! A "reactive store" is a state container; it is unrelated to the
//! domain term "store" (a merchant's storefront instance).

mod cart;
mod customer;
mod toasts;
mod wishlist;

pub use cart::CartStore;
pub use customer::{CustomerState, CustomerStore};
pub use toasts::{Toast, ToastSeverity, ToastStore, TOAST_DISMISS_AFTER};
pub use wishlist::WishlistStore;

use std::sync::{Arc, Mutex, PoisonError, RwLock};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A state cell that notifies subscribers on every mutation.
///
/// Reads return clones; subscribers are invoked synchronously, in
/// registration order, with the state as of the mutation that triggered
/// them. No lock is held while subscribers run, so a subscriber may
/// mutate the same store it observes; each nested mutation notifies
/// again, with the usual recursion caveat for subscribers that mutate
/// unconditionally.
pub(crate) struct Observable<T> {
    state: RwLock<T>,
    listeners: Mutex<Vec<Listener<T>>>,
}

impl<T: Clone> Observable<T> {
    pub(crate) fn new(initial: T) -> Self {
        Self {
            state: RwLock::new(initial),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Returns a clone of the current state.
    pub(crate) fn get(&self) -> T {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Registers a subscriber invoked on every subsequent mutation.
    pub(crate) fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    /// Replaces the state and notifies subscribers.
    pub(crate) fn set(&self, next: T) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *state = next;
        }
        self.notify();
    }

    /// Mutates the state in place and notifies subscribers.
    pub(crate) fn update(&self, mutate: impl FnOnce(&mut T)) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            mutate(&mut state);
        }
        self.notify();
    }

    fn notify(&self) {
        let state = self.get();
        // Snapshot the listener list so no lock is held during the
        // calls; a listener may re-enter this store.
        let listeners: Vec<Listener<T>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in &listeners {
            listener(&state);
        }
    }
}

impl<T: std::fmt::Debug + Clone> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("state", &self.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_set_notifies_subscribers() {
        let cell = Observable::new(0_i32);
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_by_listener = Arc::clone(&seen);
        cell.subscribe(move |value| {
            seen_by_listener.store(usize::try_from(*value).unwrap(), Ordering::SeqCst);
        });

        cell.set(7);
        assert_eq!(cell.get(), 7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_update_mutates_in_place() {
        let cell = Observable::new(vec![1, 2]);
        cell.update(|v| v.push(3));
        assert_eq!(cell.get(), vec![1, 2, 3]);
    }

    #[test]
    fn test_listener_may_mutate_the_same_cell() {
        let cell = Arc::new(Observable::new(0_i32));
        let reentered = Arc::new(AtomicUsize::new(0));

        let cell_in_listener = Arc::clone(&cell);
        let reentered_in_listener = Arc::clone(&reentered);
        cell.subscribe(move |value| {
            if *value == 1 && reentered_in_listener.fetch_add(1, Ordering::SeqCst) == 0 {
                cell_in_listener.set(2);
            }
        });

        cell.set(1);
        assert_eq!(cell.get(), 2);
        assert_eq!(reentered.load(Ordering::SeqCst), 1);
    }
}
