//! Home page route handler.
//!
//! Renders whichever view the visitor's session has selected: the filtered
//! catalog or the cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use shirt_store_core::Product;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::session::load_shop_state;
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    /// Empty when the catalog has no image for this product.
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            image: product.image.clone().unwrap_or_default(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub query: String,
    pub has_query: bool,
    pub show_cart: bool,
    pub cart_count: u64,
    /// "Found N products for ..." banner; empty when no query is set.
    pub summary: String,
    pub products: Vec<ProductView>,
    pub cart: CartView,
}

/// Display the catalog or the cart, per the session's display mode.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let shop = load_shop_state(&session).await?;
    let catalog = state.catalog();

    let products: Vec<ProductView> = shop
        .visible_products(catalog)
        .into_iter()
        .map(ProductView::from)
        .collect();

    tracing::debug!(
        query = shop.query(),
        visible = products.len(),
        display = ?shop.display(),
        "Rendering home"
    );

    Ok(HomeTemplate {
        query: shop.query().to_string(),
        has_query: shop.has_query(),
        show_cart: shop.display().is_cart(),
        cart_count: shop.cart_item_count(),
        summary: shop
            .search_summary(catalog)
            .map(|summary| summary.to_string())
            .unwrap_or_default(),
        products,
        cart: CartView::from(shop.cart()),
    })
}
