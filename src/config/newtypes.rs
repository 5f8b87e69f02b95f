//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A validated store identifier.
///
/// Every Fast Store storefront is addressed by a stable public identifier
/// (a slug such as `demo-store`). All API paths and all persisted local
/// keys are namespaced by it, which is what allows several stores to share
/// one storage backend.
///
/// # Accepted Format
///
/// Lowercase ASCII letters, digits and hyphens; must not start or end with
/// a hyphen. Input is trimmed and lowercased before validation.
///
/// # Example
///
/// ```rust
/// use fast_store_sdk::StoreId;
///
/// let id = StoreId::new("demo-store").unwrap();
/// assert_eq!(id.as_ref(), "demo-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a new validated store id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreId`] if the id is empty and
    /// [`ConfigError::InvalidStoreId`] if it contains invalid characters.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim().to_lowercase();

        if id.is_empty() {
            return Err(ConfigError::EmptyStoreId);
        }
        if !Self::is_valid(&id) {
            return Err(ConfigError::InvalidStoreId { id });
        }
        Ok(Self(id))
    }

    fn is_valid(id: &str) -> bool {
        if id.starts_with('-') || id.ends_with('-') {
            return false;
        }
        id.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for StoreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated host URL for the storefront API.
///
/// This newtype validates that the URL has a proper format with a scheme.
/// Trailing slashes are stripped so the host can be joined with API paths
/// without double separators.
///
/// # Example
///
/// ```rust
/// use fast_store_sdk::HostUrl;
///
/// let url = HostUrl::new("https://shop.example.com").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("shop.example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_id_accepts_slug() {
        let id = StoreId::new("demo-store-2").unwrap();
        assert_eq!(id.as_ref(), "demo-store-2");
    }

    #[test]
    fn test_store_id_normalizes_case_and_whitespace() {
        let id = StoreId::new("  Demo-Store ").unwrap();
        assert_eq!(id.as_ref(), "demo-store");
    }

    #[test]
    fn test_store_id_rejects_invalid() {
        assert!(matches!(StoreId::new(""), Err(ConfigError::EmptyStoreId)));
        assert!(StoreId::new("demo store").is_err());
        assert!(StoreId::new("demo_store").is_err());
        assert!(StoreId::new("-demo").is_err());
        assert!(StoreId::new("demo-").is_err());
    }

    #[test]
    fn test_store_id_serializes_to_string() {
        let id = StoreId::new("demo-store").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""demo-store""#);

        let restored: StoreId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, id);
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://shop.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("shop.example.com"));

        // With port
        let url = HostUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("localhost"));
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let url = HostUrl::new("https://shop.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        // No scheme
        assert!(HostUrl::new("shop.example.com").is_err());

        // Empty host
        assert!(HostUrl::new("https://").is_err());

        // Invalid scheme
        assert!(HostUrl::new("://example.com").is_err());
    }
}
