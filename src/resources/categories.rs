//! Category taxonomy.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::{ClientError, HttpClient};
use crate::resources::push_param;

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Public identifier.
    pub pid: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent category internal key, for tree layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Header image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Display ordering.
    #[serde(default)]
    pub sort_order: i32,
}

/// Filters for category listings.
#[derive(Debug, Clone, Default)]
pub struct CategoryListParams {
    /// Restrict to children of this category.
    pub parent_id: Option<String>,
    /// Free-text search query.
    pub q: Option<String>,
}

impl CategoryListParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "parent_id", self.parent_id.as_deref());
        push_param(&mut query, "q", self.q.as_deref());
        query
    }
}

/// Category operations.
#[derive(Clone, Debug)]
pub struct CategoriesApi {
    http: Arc<HttpClient>,
}

impl CategoriesApi {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists categories.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or envelope failure.
    pub async fn list(&self, params: &CategoryListParams) -> Result<Vec<Category>, ClientError> {
        self.http.get_query("/categories", &params.to_query()).await
    }

    /// Fetches one category.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the category does not exist.
    pub async fn get(&self, pid: &str) -> Result<Category, ClientError> {
        self.http.get(&format!("/categories/{pid}")).await
    }
}
