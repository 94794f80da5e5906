//! Shirt Store Core - catalog, cart, and view state.
//!
//! This crate holds everything the storefront needs to decide what to show:
//! - [`catalog`] - the read-only product list and substring search filter
//! - [`cart`] - line items keyed by product, with add/remove/set-quantity/clear
//! - [`display`] - the catalog/cart view toggle
//! - [`shop`] - the per-session container tying the three together
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O, no
//! HTTP, no sessions. Rendering and persistence of a [`ShopState`] belong to
//! the caller.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod display;
pub mod shop;
pub mod types;

#[cfg(test)]
mod test_support;

pub use cart::{CartError, CartLineItem, CartState};
pub use catalog::{Catalog, CatalogError, filter_products};
pub use display::DisplayMode;
pub use shop::{SearchSummary, ShopState};
pub use types::*;
