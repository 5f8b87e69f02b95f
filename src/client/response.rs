//! The response envelope consumed from the storefront API.
//!
//! Every endpoint wraps its payload in the same JSON envelope:
//!
//! ```json
//! {"ok": true, "data": {...}, "meta": {"cursor": "...", "has_more": true, "count": 20}}
//! {"ok": false, "error": {"code": "not_found", "message": "Cart not found"}}
//! ```
//!
//! The envelope is decoded exactly once, at the transport boundary. Domain
//! modules only ever see the typed `data` payload or a
//! [`ClientError`](crate::client::ClientError); the "envelope or raw body"
//! ambiguity of loosely typed clients does not propagate past this module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The raw response envelope, generic over the `data` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded at the application level.
    pub ok: bool,
    /// The payload, present on success.
    pub data: Option<T>,
    /// Cursor pagination metadata, present on list endpoints.
    pub meta: Option<PaginationMeta>,
    /// The error envelope, present on failure.
    pub error: Option<ApiError>,
}

/// Cursor pagination metadata returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Opaque token marking the position to resume from.
    #[serde(default)]
    pub cursor: Option<String>,
    /// Whether another page exists after this one.
    pub has_more: bool,
    /// Number of items in this page.
    pub count: usize,
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items in this page.
    pub data: Vec<T>,
    /// Pagination metadata, if the endpoint returned any.
    pub meta: Option<PaginationMeta>,
}

impl<T> Page<T> {
    /// Returns the cursor to resume from, if another page exists.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .filter(|meta| meta.has_more)
            .and_then(|meta| meta.cursor.as_deref())
    }

    /// Whether another page exists after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.meta.as_ref().is_some_and(|meta| meta.has_more)
    }
}

/// An application-level error from the API's error envelope.
///
/// All failure modes of the transport are normalized into this
/// `{code, message}` shape: network-level failures keep their own
/// [`ClientError`](crate::client::ClientError) variants, while HTTP
/// errors, envelope errors and malformed bodies all end up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} ({code})")]
pub struct ApiError {
    /// Machine-readable error code (e.g. `not_found`, `validation`),
    /// or the HTTP status for responses without an envelope.
    pub code: String,
    /// Human-readable message, suitable for toast notifications.
    pub message: String,
    /// Optional structured details (e.g. per-field validation errors).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error code used when a success response body is not valid JSON.
pub const PARSE_ERROR_CODE: &str = "parse_error";

impl ApiError {
    /// Creates an error with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Fallback error for non-2xx responses without a decodable envelope:
    /// the HTTP status becomes the code.
    #[must_use]
    pub(crate) fn from_status(status: u16) -> Self {
        Self::new(status.to_string(), "Server error")
    }

    /// Fallback error for 2xx responses whose body is not a valid envelope.
    #[must_use]
    pub(crate) fn parse_error() -> Self {
        Self::new(PARSE_ERROR_CODE, "Malformed response body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_deserializes() {
        let json = r#"{"ok": true, "data": {"pid": "p1"}, "meta": {"cursor": "abc", "has_more": true, "count": 1}}"#;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert!(envelope.ok);
        assert!(envelope.data.is_some());
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.cursor.as_deref(), Some("abc"));
        assert!(meta.has_more);
        assert_eq!(meta.count, 1);
    }

    #[test]
    fn test_error_envelope_deserializes() {
        let json = r#"{"ok": false, "error": {"code": "not_found", "message": "Cart not found"}}"#;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert!(!envelope.ok);
        let error = envelope.error.unwrap();
        assert_eq!(error.code, "not_found");
        assert_eq!(error.message, "Cart not found");
        assert!(error.details.is_none());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("validation", "Quantity must be positive");
        assert_eq!(error.to_string(), "Quantity must be positive (validation)");
    }

    #[test]
    fn test_page_next_cursor_requires_has_more() {
        let page = Page {
            data: vec![1, 2],
            meta: Some(PaginationMeta {
                cursor: Some("abc".to_string()),
                has_more: false,
                count: 2,
            }),
        };
        assert!(page.next_cursor().is_none());
        assert!(!page.has_more());

        let page = Page {
            data: vec![1, 2],
            meta: Some(PaginationMeta {
                cursor: Some("abc".to_string()),
                has_more: true,
                count: 2,
            }),
        };
        assert_eq!(page.next_cursor(), Some("abc"));
    }
}
