//! In-memory shopping cart.
//!
//! A [`CartState`] is an ordered list of line items, at most one per product.
//! New products are appended; quantity changes update the existing line in
//! place so ordering never shifts.
//!
//! Every operation is total: unknown product IDs and non-positive quantities
//! are defined no-ops or removals, never errors.

use std::collections::HashSet;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, Product, ProductId};

/// One distinct product's presence in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    /// Always at least one; a line that would drop to zero is removed instead.
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Product ID of this line.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity.get())
    }
}

/// Errors rebuilding a cart from stored line items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Duplicate cart line for product {0}")]
    DuplicateProductId(ProductId),
}

/// Cart contents, unique by product ID.
///
/// Serialized as a plain list of line items. Decoding rejects a list with two
/// lines for the same product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLineItem>", into = "Vec<CartLineItem>")]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line if the product is already in the cart,
    /// otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(index) => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity = item.quantity.saturating_add(1);
                }
            }
            None => self.items.push(CartLineItem::new(product.clone())),
        }
    }

    /// Remove the line for `product_id`. No-op if it isn't in the cart.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product_id() != product_id);
    }

    /// Replace the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. Unknown product IDs are
    /// ignored: this never inserts a new line. Quantities beyond `u32::MAX`
    /// saturate.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        let Some(quantity) = clamp_quantity(quantity) else {
            self.remove(product_id);
            return;
        };

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id() == product_id)
        {
            item.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines; drives the cart badge.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of line totals, or `None` for an empty cart.
    ///
    /// The catalog is single-currency, so the first line's currency is used.
    #[must_use]
    pub fn subtotal(&self) -> Option<Price> {
        let first = self.items.first()?;
        let amount = self.items.iter().map(|item| item.line_total().amount).sum();
        Some(Price::new(amount, first.product.price.currency_code))
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Line for `product_id`, if present.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.product_id() == product_id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id() == product_id)
    }
}

impl TryFrom<Vec<CartLineItem>> for CartState {
    type Error = CartError;

    fn try_from(items: Vec<CartLineItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.product_id()) {
                return Err(CartError::DuplicateProductId(item.product_id()));
            }
        }
        Ok(Self { items })
    }
}

impl From<CartState> for Vec<CartLineItem> {
    fn from(cart: CartState) -> Self {
        cart.items
    }
}

/// Map a requested quantity onto a storable one; `None` means remove.
fn clamp_quantity(quantity: i64) -> Option<NonZeroU32> {
    if quantity <= 0 {
        return None;
    }
    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    NonZeroU32::new(quantity)
}
