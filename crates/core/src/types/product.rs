//! Catalog product records.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as supplied by the catalog source.
///
/// Products are never mutated once loaded; cart line items hold a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    /// Image URL, if the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Whether this product matches an already-lowercased search needle.
    ///
    /// Matches on name, description, or category.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}
