//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalog or cart view, per session display mode
//! GET  /health                 - Health check
//!
//! # Search
//! POST /search                 - Set query (form: q)
//! POST /search/clear           - Clear query
//!
//! # View
//! POST /view/toggle            - Flip between catalog and cart views
//!
//! # Cart
//! POST /cart/add               - Add one unit (form: product_id)
//! POST /cart/update            - Set quantity (form: product_id, quantity)
//! POST /cart/remove            - Remove line (form: product_id)
//! POST /cart/clear             - Empty cart
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # JSON API
//! GET  /api/products           - Filtered catalog for the current query
//! GET  /api/cart               - Cart contents and count
//! ```
//!
//! Form posts answer with `303 See Other` back to `/`.

pub mod api;
pub mod cart;
pub mod home;
pub mod search;
pub mod view;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(search::set_query))
        .route("/clear", post(search::clear_query))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products::index))
        .route("/cart", get(api::cart::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Search
        .nest("/search", search_routes())
        // View toggle
        .route("/view/toggle", post(view::toggle))
        // Cart routes
        .nest("/cart", cart_routes())
        // JSON API
        .nest("/api", api_routes())
}
