//! JSON API for the storefront.
//!
//! Read-only views of the same session state the HTML pages render, for
//! scripts and tests.

pub mod cart;
pub mod products;
