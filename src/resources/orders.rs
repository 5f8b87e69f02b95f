//! Order creation and history.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::{ClientError, HttpClient, Page};
use crate::resources::push_param;

/// A line item of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Public identifier.
    pub pid: String,
    /// Product title at time of purchase.
    pub title: String,
    /// SKU at time of purchase.
    #[serde(default)]
    pub sku: String,
    /// Units purchased.
    pub quantity: i32,
    /// Unit price in minor currency units.
    pub unit_price: i64,
    /// Line total in minor currency units.
    pub total: i64,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Public identifier.
    pub pid: String,
    /// Human-facing order number.
    pub order_number: String,
    /// Order status (`pending`, `confirmed`, `shipped`, ...).
    #[serde(default)]
    pub status: String,
    /// Payment status (`awaiting`, `paid`, `failed`, `refunded`).
    #[serde(default)]
    pub payment_status: String,
    /// Fulfillment status (`not_fulfilled`, `fulfilled`, `partially_fulfilled`).
    #[serde(default)]
    pub fulfillment_status: String,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,
    /// Item subtotal in minor currency units.
    #[serde(default)]
    pub subtotal: i64,
    /// Tax in minor currency units.
    #[serde(default)]
    pub tax: i64,
    /// Shipping in minor currency units.
    #[serde(default)]
    pub shipping: i64,
    /// Discount in minor currency units.
    #[serde(default)]
    pub discount: i64,
    /// Grand total in minor currency units.
    #[serde(default)]
    pub total: i64,
    /// Chosen payment method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Free-form customer notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp (backend string form).
    #[serde(default)]
    pub created_at: String,
    /// Payment timestamp, once paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    /// Line items, when the backend includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
}

/// Draft posted to create an order.
///
/// The order's line items are implicit: the backend snapshots the
/// customer's open cart server-side. Internal numeric keys are used here
/// because this is a request body (public identifiers are for lookups).
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderDraft {
    /// Internal key of the ordering customer, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    /// Internal key of the shipping address, when attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_id: Option<i64>,
    /// Internal key of the billing address, when attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_id: Option<i64>,
    /// Chosen payment method (`pix`, `credit_card`, `boleto`).
    pub payment_method: String,
    /// Free-form customer notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Order operations.
#[derive(Clone, Debug)]
pub struct OrdersApi {
    http: Arc<HttpClient>,
}

impl OrdersApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates an order from the draft and the cart's server-side contents.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation (e.g. empty cart) or
    /// transport failure.
    pub async fn create(&self, draft: &OrderDraft) -> Result<Order, ClientError> {
        self.http.post("/orders", draft).await
    }

    /// Fetches one order by its public identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the order does not exist.
    pub async fn get(&self, pid: &str) -> Result<Order, ClientError> {
        self.http.get(&format!("/orders/{pid}")).await
    }

    /// Lists a customer's orders with cursor pagination.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or envelope failure.
    pub async fn list_for_customer(
        &self,
        customer_pid: &str,
        cursor: Option<&str>,
    ) -> Result<Page<Order>, ClientError> {
        let mut query = Vec::new();
        push_param(&mut query, "cursor", cursor);
        self.http
            .get_paginated(&format!("/customers/{customer_pid}/orders"), &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_draft_omits_absent_ids() {
        let draft = OrderDraft {
            customer_id: None,
            shipping_address_id: None,
            billing_address_id: None,
            payment_method: "pix".to_string(),
            notes: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"payment_method": "pix"}));
    }

    #[test]
    fn test_order_draft_includes_supplied_ids() {
        let draft = OrderDraft {
            customer_id: Some(7),
            shipping_address_id: Some(3),
            billing_address_id: Some(3),
            payment_method: "credit_card".to_string(),
            notes: Some("leave at the door".to_string()),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["customer_id"], 7);
        assert_eq!(json["shipping_address_id"], 3);
        assert_eq!(json["billing_address_id"], 3);
        assert_eq!(json["notes"], "leave at the door");
    }
}
