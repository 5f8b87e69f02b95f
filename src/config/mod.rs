//! Configuration types for the Fast Store SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreConfig`]: The main configuration struct holding all SDK settings
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`StoreId`]: A validated store identifier
//! - [`HostUrl`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use fast_store_sdk::{StoreConfig, StoreId, HostUrl};
//!
//! let config = StoreConfig::builder()
//!     .store_id(StoreId::new("demo-store").unwrap())
//!     .host(HostUrl::new("https://shop.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base(), "https://shop.example.com/api/stores/demo-store");
//! ```

mod newtypes;

pub use newtypes::{HostUrl, StoreId};

use crate::error::ConfigError;

/// Default currency used when the builder does not specify one.
pub const DEFAULT_CURRENCY: &str = "BRL";

/// Configuration for the Fast Store SDK.
///
/// Holds everything needed to address one storefront: the store's public
/// identifier, the API host, the display currency and an optional
/// User-Agent prefix. Configuration is instance-based and passed
/// explicitly; there is no global state.
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    store_id: StoreId,
    host: HostUrl,
    currency: String,
    user_agent_prefix: Option<String>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the store identifier.
    #[must_use]
    pub const fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Returns the API host URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the display currency (ISO 4217 code).
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL all store-scoped API paths are relative to:
    /// `{host}/api/stores/{store_id}`.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!(
            "{}/api/stores/{}",
            self.host.as_ref(),
            self.store_id.as_ref()
        )
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// Required fields are `store_id` and `host`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `currency`: `"BRL"`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    store_id: Option<StoreId>,
    host: Option<HostUrl>,
    currency: Option<String>,
    user_agent_prefix: Option<String>,
}

impl StoreConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store identifier (required).
    #[must_use]
    pub fn store_id(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Sets the API host URL (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the display currency.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets an optional prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_id` or
    /// `host` was not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let store_id = self
            .store_id
            .ok_or(ConfigError::MissingRequiredField { field: "store_id" })?;
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        Ok(StoreConfig {
            store_id,
            host,
            currency: self
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_store_id() {
        let result = StoreConfig::builder()
            .host(HostUrl::new("https://shop.example.com").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "store_id" })
        ));
    }

    #[test]
    fn test_builder_requires_host() {
        let result = StoreConfig::builder()
            .store_id(StoreId::new("demo-store").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "host" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = StoreConfig::builder()
            .store_id(StoreId::new("demo-store").unwrap())
            .host(HostUrl::new("https://shop.example.com").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.currency(), "BRL");
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_api_base_construction() {
        let config = StoreConfig::builder()
            .store_id(StoreId::new("demo-store").unwrap())
            .host(HostUrl::new("http://localhost:3000").unwrap())
            .currency("USD")
            .build()
            .unwrap();

        assert_eq!(
            config.api_base(),
            "http://localhost:3000/api/stores/demo-store"
        );
        assert_eq!(config.currency(), "USD");
    }
}
