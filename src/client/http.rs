//! HTTP client for storefront API communication.
//!
//! This module provides the [`HttpClient`] type for making requests against
//! a store's API base path, attaching the customer session token and
//! decoding the response envelope.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::errors::ClientError;
use crate::client::response::{ApiError, ApiResponse, Page};
use crate::config::StoreConfig;
use crate::storage::{Storage, StorageKeys};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the customer session token.
pub const CUSTOMER_TOKEN_HEADER: &str = "X-Customer-Token";

/// HTTP client for the storefront API.
///
/// The client handles:
/// - Base URL construction: `{host}/api/stores/{store_id}` plus the
///   request path
/// - Default headers including User-Agent and JSON content negotiation
/// - Attaching `X-Customer-Token` when a session token is persisted; the
///   token is read from storage at request time, so a login performed
///   through the same storage is picked up by the very next call
/// - Decoding the `{ok, data, meta, error}` envelope once and mapping
///   every failure to [`ClientError`]
///
/// There are no retries and no timeout policy beyond the transport's own.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Fully qualified API base, e.g. `https://shop.example.com/api/stores/demo-store`.
    api_base: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Persistence backend holding the session token.
    storage: Arc<dyn Storage>,
    /// Storage key the session token lives under.
    token_key: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StoreConfig, storage: Arc<dyn Storage>) -> Self {
        let keys = StorageKeys::new(config.store_id());

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Fast Store SDK v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: config.api_base(),
            default_headers,
            storage,
            token_key: keys.customer_token,
        }
    }

    /// Returns the API base URL for this client.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request and decodes the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network failure, application error
    /// envelope or payload shape mismatch.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let envelope = self.send(Method::GET, path, &[], None).await?;
        Self::into_data(envelope)
    }

    /// Sends a GET request with query parameters and decodes the `data` payload.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let envelope = self.send(Method::GET, path, query, None).await?;
        Self::into_data(envelope)
    }

    /// Sends a GET request against a paginated listing and returns the
    /// decoded page. A missing `data` field decodes as an empty page.
    ///
    /// # Errors
    ///
    /// Failures propagate as [`ClientError`]; there is no silent
    /// empty-page default on error.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Page<T>, ClientError> {
        let envelope = self.send(Method::GET, path, query, None).await?;
        let data = match envelope.data {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        Ok(Page {
            data,
            meta: envelope.meta,
        })
    }

    /// Sends a POST request with a JSON body and decodes the `data` payload.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.post_query(path, &[], body).await
    }

    /// Sends a POST request with query parameters and a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn post_query<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_value(body)?;
        let envelope = self.send(Method::POST, path, query, Some(body)).await?;
        Self::into_data(envelope)
    }

    /// Sends a PUT request with a JSON body and decodes the `data` payload.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_value(body)?;
        let envelope = self.send(Method::PUT, path, &[], Some(body)).await?;
        Self::into_data(envelope)
    }

    /// Sends a DELETE request and decodes the `data` payload.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let envelope = self.send(Method::DELETE, path, &[], None).await?;
        Self::into_data(envelope)
    }

    /// Sends the request and decodes the envelope.
    ///
    /// Normalization rules:
    /// - network failures map to [`ClientError::Network`]
    /// - non-2xx or `ok == false` yields the envelope's error, or a
    ///   `{code: status, message: "Server error"}` fallback when the body
    ///   carries no decodable envelope
    /// - a 2xx body that is not a valid envelope yields the
    ///   `parse_error` code
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse<serde_json::Value>, ClientError> {
        let url = format!("{}{path}", self.api_base);

        let mut builder = self.client.request(method, &url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(token) = self.storage.get(&self.token_key) {
            builder = builder.header(CUSTOMER_TOKEN_HEADER, token);
        }
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope: ApiResponse<serde_json::Value> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if status.is_success() => {
                return Err(ApiError::parse_error().into());
            }
            Err(_) => {
                return Err(ApiError::from_status(status.as_u16()).into());
            }
        };

        if !status.is_success() || !envelope.ok {
            let error = envelope
                .error
                .unwrap_or_else(|| ApiError::from_status(status.as_u16()));
            return Err(error.into());
        }

        Ok(envelope)
    }

    /// Extracts and decodes the `data` payload from a success envelope.
    ///
    /// A missing `data` field decodes as JSON `null`, which succeeds for
    /// `()`-like targets and fails fast with [`ClientError::Decode`] for
    /// value-returning calls.
    fn into_data<T: DeserializeOwned>(
        envelope: ApiResponse<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let value = envelope.data.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(value)?)
    }
}
