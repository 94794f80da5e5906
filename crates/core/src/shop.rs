//! Per-shopper state: search query, cart, and current view.
//!
//! [`ShopState`] is the container the rendering surface talks to. It exposes
//! one method per user action and plain data for rendering; it never touches
//! the catalog itself, which is passed in read-only where needed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::CartState;
use crate::catalog::Catalog;
use crate::display::DisplayMode;
use crate::types::{Product, ProductId};

/// State owned by one shopping session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopState {
    #[serde(default)]
    query: String,
    #[serde(default)]
    cart: CartState,
    #[serde(default)]
    display: DisplayMode,
}

impl ShopState {
    /// Fresh session: empty query, empty cart, catalog view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a non-empty query is set (drives the clear-search control).
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    #[must_use]
    pub const fn cart(&self) -> &CartState {
        &self.cart
    }

    #[must_use]
    pub const fn display(&self) -> DisplayMode {
        self.display
    }

    /// Replace the search query verbatim.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub const fn toggle_display(&mut self) {
        self.display.toggle();
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.cart.remove(product_id);
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Badge count: total units in the cart.
    #[must_use]
    pub fn cart_item_count(&self) -> u64 {
        self.cart.total_count()
    }

    /// Catalog products matching the current query.
    #[must_use]
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.filter(&self.query)
    }

    /// Result summary for the current query, or `None` when no query is set.
    #[must_use]
    pub fn search_summary(&self, catalog: &Catalog) -> Option<SearchSummary> {
        if !self.has_query() {
            return None;
        }
        Some(SearchSummary {
            count: self.visible_products(catalog).len(),
            query: self.query.clone(),
        })
    }
}

/// "Found N products for ..." banner shown above search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub count: usize,
    pub query: String,
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(
            f,
            "Found {} product{plural} for \"{}\"",
            self.count, self.query
        )
    }
}
