//! Customer profiles and addresses.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::{ClientError, HttpClient};

/// A customer profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Internal numeric key, used only in request bodies (order drafts
    /// reference customers by it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Public identifier.
    pub pid: String,
    /// Account email.
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the customer has a password-backed account (as opposed to
    /// a transparently provisioned guest record).
    #[serde(default)]
    pub has_account: bool,
    /// Whether the customer opted into marketing.
    #[serde(default)]
    pub marketing_consent: bool,
    /// Creation timestamp (backend string form).
    #[serde(default)]
    pub created_at: String,
}

/// Editable profile fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerUpdate {
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Marketing opt-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_consent: Option<bool>,
}

/// A saved customer address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Internal numeric key, used only in request bodies (order drafts
    /// reference addresses by it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Public identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Recipient given name.
    #[serde(default)]
    pub first_name: String,
    /// Recipient family name.
    #[serde(default)]
    pub last_name: String,
    /// Street and number.
    #[serde(default)]
    pub address_line_1: String,
    /// Complement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    /// City.
    #[serde(default)]
    pub city: String,
    /// State or region code.
    #[serde(default)]
    pub state: String,
    /// Postal code.
    #[serde(default)]
    pub postal_code: String,
    /// ISO country code.
    #[serde(default)]
    pub country: String,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether this is the default shipping address.
    #[serde(default)]
    pub is_default_shipping: bool,
    /// Whether this is the default billing address.
    #[serde(default)]
    pub is_default_billing: bool,
}

/// Payload for adding an address.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewAddress {
    /// Recipient given name.
    pub first_name: String,
    /// Recipient family name.
    pub last_name: String,
    /// Street and number.
    pub address_line_1: String,
    /// Complement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    /// City.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// ISO country code.
    pub country: String,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether to make this the default shipping address.
    pub is_default_shipping: bool,
    /// Whether to make this the default billing address.
    pub is_default_billing: bool,
}

/// Customer operations.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    http: Arc<HttpClient>,
}

impl CustomersApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches a customer profile.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the customer does not exist.
    pub async fn get(&self, pid: &str) -> Result<Customer, ClientError> {
        self.http.get(&format!("/customers/{pid}")).await
    }

    /// Updates profile fields.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation or transport failure.
    pub async fn update(
        &self,
        pid: &str,
        update: &CustomerUpdate,
    ) -> Result<Customer, ClientError> {
        self.http.put(&format!("/customers/{pid}"), update).await
    }

    /// Lists a customer's saved addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or envelope failure.
    pub async fn addresses(&self, pid: &str) -> Result<Vec<Address>, ClientError> {
        self.http.get(&format!("/customers/{pid}/addresses")).await
    }

    /// Adds an address to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation or transport failure.
    pub async fn add_address(
        &self,
        pid: &str,
        address: &NewAddress,
    ) -> Result<Address, ClientError> {
        self.http
            .post(&format!("/customers/{pid}/addresses"), address)
            .await
    }
}
