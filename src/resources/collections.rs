//! Curated product collections.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::{ClientError, HttpClient};
use crate::resources::products::Product;

/// A curated collection, optionally carrying its products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Public identifier.
    pub pid: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Header image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// The collection's products, when fetched individually.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

/// Collection operations.
#[derive(Clone, Debug)]
pub struct CollectionsApi {
    http: Arc<HttpClient>,
}

impl CollectionsApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists all collections.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or envelope failure.
    pub async fn list(&self) -> Result<Vec<Collection>, ClientError> {
        self.http.get("/collections").await
    }

    /// Fetches one collection with its products.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the collection does not exist.
    pub async fn get(&self, pid: &str) -> Result<Collection, ClientError> {
        self.http.get(&format!("/collections/{pid}")).await
    }
}
