//! Cart contents as JSON.

use axum::Json;
use serde::Serialize;
use shirt_store_core::{CartState, DisplayMode};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::load_shop_state;

/// Response body for `GET /api/cart`.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: CartState,
    pub total_count: u64,
    /// Formatted subtotal, absent for an empty cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,
    pub display: DisplayMode,
}

/// The session's cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartResponse>> {
    let shop = load_shop_state(&session).await?;
    let cart = shop.cart();

    Ok(Json(CartResponse {
        items: cart.clone(),
        total_count: cart.total_count(),
        subtotal: cart.subtotal().map(|price| price.to_string()),
        display: shop.display(),
    }))
}
