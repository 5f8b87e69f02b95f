//! Customer authentication.
//!
//! Login and registration persist the returned session token before
//! handing the payload back, so the very next request through the same
//! [`HttpClient`](crate::client::HttpClient) is authenticated. Logout is
//! best-effort against the backend and unconditionally clears the local
//! token.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::{ClientError, HttpClient};
use crate::resources::customers::Customer;
use crate::storage::Storage;

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Registration payload for new customer accounts.
///
/// Also used for transparently provisioned guest accounts during
/// checkout, with a randomly generated password.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the customer opted into marketing.
    pub marketing_consent: bool,
}

/// Payload returned by login and register.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    /// The session token, persisted by the SDK as a side effect.
    pub token: Option<String>,
    /// The authenticated customer's profile.
    pub customer: Option<Customer>,
}

/// Authentication operations.
#[derive(Clone, Debug)]
pub struct AuthApi {
    http: Arc<HttpClient>,
    storage: Arc<dyn Storage>,
    token_key: String,
}

impl AuthApi {
    pub(crate) fn new(http: Arc<HttpClient>, storage: Arc<dyn Storage>, token_key: String) -> Self {
        Self {
            http,
            storage,
            token_key,
        }
    }

    /// Whether a session token is currently persisted.
    ///
    /// This is a pure predicate on token presence; it does not validate
    /// the token against the backend (see
    /// [`CustomerStore::fetch`](crate::stores::CustomerStore::fetch) for that).
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.storage.get(&self.token_key).is_some()
    }

    /// Authenticates with email and password.
    ///
    /// On success the returned token is persisted before the payload is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on invalid credentials or transport failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, ClientError> {
        let payload: AuthPayload = self.http.post("/auth/login", credentials).await?;
        self.persist_token(&payload);
        Ok(payload)
    }

    /// Registers a new customer account.
    ///
    /// On success the returned token is persisted before the payload is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation or transport failure.
    pub async fn register(&self, registration: &Registration) -> Result<AuthPayload, ClientError> {
        let payload: AuthPayload = self.http.post("/auth/register", registration).await?;
        self.persist_token(&payload);
        Ok(payload)
    }

    /// Ends the session.
    ///
    /// The backend call is best-effort: its failure is logged and
    /// swallowed, and the local token is cleared either way.
    pub async fn logout(&self) {
        let result: Result<serde_json::Value, ClientError> =
            self.http.post("/auth/logout", &serde_json::json!({})).await;
        if let Err(err) = result {
            tracing::warn!("logout request failed, clearing local token anyway: {err}");
        }
        self.clear_token();
    }

    /// Fetches the profile of the currently authenticated customer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the token is missing, expired or
    /// rejected.
    pub async fn me(&self) -> Result<Customer, ClientError> {
        self.http.get("/auth/me").await
    }

    /// Removes the persisted session token without calling the backend.
    pub(crate) fn clear_token(&self) {
        self.storage.remove(&self.token_key);
    }

    fn persist_token(&self, payload: &AuthPayload) {
        if let Some(token) = &payload.token {
            self.storage.set(&self.token_key, token);
        }
    }
}
