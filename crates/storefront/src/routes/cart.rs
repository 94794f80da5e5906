//! Cart route handlers.
//!
//! Each mutation loads the visitor's [`ShopState`] from the session, applies
//! one cart operation, stores it back, and redirects to the page. Unknown
//! product IDs are no-ops for remove/update; adding one is a 404 because
//! there is no product to put in the cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use shirt_store_core::{CartLineItem, CartState, ProductId, ShopState};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::session::{load_shop_state, update_shop_state};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartState> for CartView {
    fn from(cart: &CartState) -> Self {
        let Some(subtotal) = cart.subtotal() else {
            return Self::empty();
        };
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: subtotal.to_string(),
            item_count: cart.total_count(),
        }
    }
}

impl From<&CartLineItem> for CartItemView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            product_id: line.product_id().as_i32(),
            name: line.product.name.clone(),
            category: line.product.category.clone(),
            quantity: i64::from(line.quantity.get()),
            price: line.product.price.to_string(),
            line_price: line.line_total().to_string(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data.
///
/// `quantity` is signed: zero or below removes the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// Add one unit of a catalog product to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .get(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let shop = update_shop_state(&session, |shop| shop.add_to_cart(product)).await?;

    let id = product_id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(%product_id, cart_count = shop.cart_item_count(), "Added to cart");

    Ok(Redirect::to("/"))
}

/// Set a line's quantity; zero or below removes it.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let quantity = form.quantity;
    let shop =
        update_shop_state(&session, |shop| shop.update_quantity(product_id, quantity)).await?;

    tracing::info!(
        %product_id,
        quantity,
        cart_count = shop.cart_item_count(),
        "Updated cart quantity"
    );

    Ok(Redirect::to("/"))
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let shop = update_shop_state(&session, |shop| shop.remove_from_cart(product_id)).await?;

    let id = product_id.to_string();
    add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(%product_id, cart_count = shop.cart_item_count(), "Removed from cart");

    Ok(Redirect::to("/"))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Redirect> {
    update_shop_state(&session, ShopState::clear_cart).await?;

    add_breadcrumb("cart", "Cleared cart", None);
    tracing::info!("Cleared cart");

    Ok(Redirect::to("/"))
}

/// Cart count badge fragment.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let shop = load_shop_state(&session).await?;
    Ok(CartCountTemplate {
        count: shop.cart_item_count(),
    })
}
