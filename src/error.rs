//! Error types for SDK configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use fast_store_sdk::{StoreId, ConfigError};
//!
//! let result = StoreId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyStoreId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant carries enough context to tell the caller exactly which
/// value was rejected and why.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store id cannot be empty.
    #[error("Store id cannot be empty. Please provide the store's public identifier.")]
    EmptyStoreId,

    /// Store id contains invalid characters.
    #[error("Invalid store id '{id}'. Expected lowercase letters, digits and hyphens.")]
    InvalidStoreId {
        /// The invalid id that was provided.
        id: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://shop.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
