//! Catalog/cart view toggle.

use axum::response::Redirect;
use shirt_store_core::ShopState;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::session::update_shop_state;

/// Flip between the catalog and cart views.
#[instrument(skip(session))]
pub async fn toggle(session: Session) -> Result<Redirect> {
    let shop = update_shop_state(&session, ShopState::toggle_display).await?;

    add_breadcrumb("view", "Toggled view", None);
    tracing::debug!(display = ?shop.display(), "Toggled view");

    Ok(Redirect::to("/"))
}
