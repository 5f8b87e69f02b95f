//! Transport-level error types.
//!
//! The HTTP client normalizes every failure into [`ClientError`]. Domain
//! modules propagate it unchanged; embedding UIs catch it at the point of
//! user action and surface [`ApiError::message`] (with a module-specific
//! fallback string if they prefer their own wording).
//!
//! # Example
//!
//! ```rust,ignore
//! match client.cart().get("abc").await {
//!     Ok(cart) => println!("total: {}", cart.total),
//!     Err(ClientError::Api(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(ClientError::Network(e)) => println!("network error: {e}"),
//!     Err(ClientError::Decode(e)) => println!("unexpected payload shape: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::client::response::ApiError;

/// Unified error type for all API operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An application-level error envelope (`{code, message}`), or a
    /// non-2xx response normalized into that shape.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success payload did not match the expected shape.
    #[error("Failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the application error, if this is an [`ClientError::Api`].
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Returns a message suitable for showing to an end user, falling back
    /// to `fallback` for failures without an application-level message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(error) if !error.message.is_empty() => error.message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_passes_through() {
        let error = ClientError::from(ApiError::new("not_found", "Cart not found"));
        assert_eq!(error.to_string(), "Cart not found (not_found)");
        assert_eq!(error.as_api().unwrap().code, "not_found");
    }

    #[test]
    fn test_user_message_prefers_api_message() {
        let error = ClientError::from(ApiError::new("validation", "Quantity must be positive"));
        assert_eq!(
            error.user_message("Something went wrong"),
            "Quantity must be positive"
        );
    }

    #[test]
    fn test_user_message_falls_back_without_message() {
        let error = ClientError::from(ApiError::new("500", ""));
        assert_eq!(
            error.user_message("Something went wrong"),
            "Something went wrong"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error =
            &ClientError::from(ApiError::new("not_found", "missing"));
        let _ = error;
    }
}
