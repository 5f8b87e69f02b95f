//! Transient notification queue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::Observable;

/// How long a toast stays visible before auto-dismissal.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Confirmation of a completed action.
    Success,
    /// A recoverable failure the user should know about.
    Error,
    /// A condition blocking the action, fixable by the user (e.g. an
    /// unselected option or an out-of-stock variant).
    Warning,
    /// Neutral information.
    Info,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier, unique within this store instance.
    pub id: u64,
    /// Message shown to the user.
    pub message: String,
    /// Visual severity.
    pub severity: ToastSeverity,
}

/// Queue of visible notifications.
///
/// Each shown toast schedules its own dismissal after
/// [`TOAST_DISMISS_AFTER`]; dismissing by id earlier is harmless, as is
/// the timer firing after a manual dismissal. Identifiers never repeat,
/// so a timer can never remove a newer toast.
#[derive(Debug)]
pub struct ToastStore {
    toasts: Observable<Vec<Toast>>,
    next_id: AtomicU64,
}

impl ToastStore {
    pub(crate) fn new() -> Self {
        Self {
            toasts: Observable::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the currently visible toasts, oldest first.
    #[must_use]
    pub fn all(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Registers a subscriber invoked whenever the visible set changes.
    pub fn subscribe(&self, listener: impl Fn(&Vec<Toast>) + Send + Sync + 'static) {
        self.toasts.subscribe(listener);
    }

    /// Shows a toast and schedules its auto-dismissal.
    ///
    /// Returns the toast's id so callers can dismiss it early.
    pub fn show(self: &Arc<Self>, message: impl Into<String>, severity: ToastSeverity) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        });

        let store = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(TOAST_DISMISS_AFTER).await;
            store.dismiss(id);
        });

        id
    }

    /// Shows a success toast.
    pub fn success(self: &Arc<Self>, message: impl Into<String>) -> u64 {
        self.show(message, ToastSeverity::Success)
    }

    /// Shows an error toast.
    pub fn error(self: &Arc<Self>, message: impl Into<String>) -> u64 {
        self.show(message, ToastSeverity::Error)
    }

    /// Shows a warning toast.
    pub fn warning(self: &Arc<Self>, message: impl Into<String>) -> u64 {
        self.show(message, ToastSeverity::Warning)
    }

    /// Shows an info toast.
    pub fn info(self: &Arc<Self>, message: impl Into<String>) -> u64 {
        self.show(message, ToastSeverity::Info)
    }

    /// Removes a toast by id. A miss is a no-op.
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| {
            toasts.retain(|toast| toast.id != id);
        });
    }
}
