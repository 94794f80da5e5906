//! Filtered catalog as JSON.

use axum::{Json, extract::State};
use serde::Serialize;
use shirt_store_core::Product;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::load_shop_state;
use crate::state::AppState;

/// Response body for `GET /api/products`.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub query: String,
    pub count: usize,
    pub products: Vec<Product>,
}

/// Products matching the session's current query.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<ProductsResponse>> {
    let shop = load_shop_state(&session).await?;
    let products: Vec<Product> = shop
        .visible_products(state.catalog())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ProductsResponse {
        query: shop.query().to_string(),
        count: products.len(),
        products,
    }))
}
