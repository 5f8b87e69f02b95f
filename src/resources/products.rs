//! Product catalog: products, variants, quantity-tiered prices.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ClientError, HttpClient, Page};
use crate::resources::push_param;

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alt text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A price tier for a variant.
///
/// Amounts are integer minor currency units (cents); never floating
/// point. A tier applies to quantities of at least `min_quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    /// Public identifier.
    pub pid: String,
    /// Amount in minor currency units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Optional pricing region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Minimum quantity for this tier to apply.
    pub min_quantity: i32,
    /// Optional maximum quantity for this tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<i32>,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Internal numeric key, used only in request bodies (cart line
    /// items reference variants by it).
    #[serde(default)]
    pub id: i64,
    /// Public identifier.
    pub pid: String,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Option name/value pairs (e.g. `{"Color": "Blue", "Size": "M"}`).
    #[serde(default)]
    pub option_values: serde_json::Value,
    /// Units currently in stock.
    #[serde(default)]
    pub inventory_quantity: i32,
    /// Whether purchase is allowed with zero stock.
    #[serde(default)]
    pub allow_backorder: bool,
    /// Display ordering.
    #[serde(default)]
    pub sort_order: i32,
    /// Quantity-tiered prices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<Price>>,
}

impl Variant {
    /// Whether this variant can currently be purchased.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.inventory_quantity > 0 || self.allow_backorder
    }

    /// Selects the price tier for the requested quantity: the tier with
    /// the highest `min_quantity` not exceeding `quantity`, falling back
    /// to the first tier when none qualifies (e.g. quantity 0).
    ///
    /// Returns `None` only when the variant has no prices at all.
    #[must_use]
    pub fn price_for_quantity(&self, quantity: i32) -> Option<&Price> {
        let prices = self.prices.as_deref().unwrap_or(&[]);
        let mut tiers: Vec<&Price> = prices.iter().collect();
        tiers.sort_by(|a, b| b.min_quantity.cmp(&a.min_quantity));
        tiers
            .into_iter()
            .find(|price| quantity >= price.min_quantity)
            .or_else(|| prices.first())
    }
}

/// A read-only product projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Public identifier.
    pub pid: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Lifecycle status (`active`, `draft`, `archived`).
    #[serde(default)]
    pub status: String,
    /// Whether the product is featured.
    #[serde(default)]
    pub featured: bool,
    /// Primary image URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Gallery images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    /// Variants with nested prices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Filters for product listings.
///
/// Empty-string and `None` values are omitted from the query string, so
/// only caller-supplied filters reach the wire.
#[derive(Debug, Clone, Default)]
pub struct ProductListParams {
    /// Lifecycle status filter.
    pub status: Option<String>,
    /// Category public identifier filter.
    pub category_id: Option<String>,
    /// Featured-only filter.
    pub featured: Option<bool>,
    /// Free-text search query.
    pub q: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Cursor to resume from.
    pub cursor: Option<String>,
}

impl ProductListParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "status", self.status.as_deref());
        push_param(&mut query, "category_id", self.category_id.as_deref());
        if let Some(featured) = self.featured {
            query.push(("featured", featured.to_string()));
        }
        push_param(&mut query, "q", self.q.as_deref());
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        push_param(&mut query, "cursor", self.cursor.as_deref());
        query
    }
}

/// Product catalog operations.
#[derive(Clone, Debug)]
pub struct ProductsApi {
    http: Arc<HttpClient>,
}

impl ProductsApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists products with cursor pagination.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or envelope failure.
    pub async fn list(&self, params: &ProductListParams) -> Result<Page<Product>, ClientError> {
        self.http.get_paginated("/products", &params.to_query()).await
    }

    /// Fetches one product with nested variants and prices.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the product does not exist.
    pub async fn get(&self, pid: &str) -> Result<Product, ClientError> {
        self.http.get(&format!("/products/{pid}")).await
    }

    /// Returns the CSV export URL.
    ///
    /// Export is a navigation side effect, not a data fetch; the embedder
    /// redirects the user agent to this URL.
    #[must_use]
    pub fn export_csv_url(&self) -> String {
        format!("{}/products/export/csv", self.http.api_base())
    }

    /// Returns the bulk-import CSV template URL.
    ///
    /// Like [`ProductsApi::export_csv_url`], this is a navigation target.
    #[must_use]
    pub fn import_template_url(&self) -> String {
        format!("{}/products/import/template", self.http.api_base())
    }
}
