//! Static product catalog and search filtering.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{Product, ProductId};

/// Errors building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an ID.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Filter products by a case-insensitive substring query.
///
/// A product matches if the lowercased query occurs in its lowercased name,
/// description, or category. The query is not trimmed, so an empty query
/// matches everything. Relative order is preserved.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.matches_lowercase(&needle))
        .collect()
}

/// The full, read-only list of products for a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product IDs.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateProductId` if two products share an ID.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and
    /// `CatalogError::DuplicateProductId` for repeated IDs.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Products matching `query`, in catalog order.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&Product> {
        filter_products(&self.products, query)
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
