//! Integration tests for the Shirt Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shirt-store-integration-tests
//! ```
//!
//! Each test spawns the storefront router on an ephemeral local port and talks
//! to it over HTTP with a cookie-aware client, so session state carries across
//! requests exactly as it would in a browser.

use std::net::SocketAddr;

use reqwest::{Client, Response};
use serde_json::Value;
use shirt_store_core::Catalog;
use shirt_store_storefront::catalog::default_catalog;
use shirt_store_storefront::config::StorefrontConfig;
use shirt_store_storefront::state::AppState;

/// A running storefront plus a client holding one visitor's session.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront serving the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server can't be started.
    #[allow(clippy::expect_used)]
    pub async fn new() -> Self {
        let catalog = default_catalog().expect("built-in catalog should parse");
        Self::with_catalog(catalog).await
    }

    /// Start a storefront serving `catalog`.
    ///
    /// # Panics
    ///
    /// Panics if the server can't be started.
    #[allow(clippy::expect_used)]
    pub async fn with_catalog(catalog: Catalog) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr: SocketAddr = listener.local_addr().expect("local addr");

        let config = StorefrontConfig {
            host: addr.ip(),
            port: addr.port(),
            base_url: format!("http://{addr}"),
            ..StorefrontConfig::default()
        };
        let app = shirt_store_storefront::app(AppState::new(config, catalog));

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self {
            client: Self::new_client(),
            base_url: format!("http://{addr}"),
        }
    }

    /// A fresh client with its own cookie jar (a second visitor).
    ///
    /// # Panics
    ///
    /// Panics if the client can't be built.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn new_client() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("build client")
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a page and return its body.
    ///
    /// # Panics
    ///
    /// Panics on transport errors.
    #[allow(clippy::expect_used)]
    pub async fn get_text(&self, path: &str) -> String {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request")
            .text()
            .await
            .expect("response body")
    }

    /// GET a JSON endpoint.
    ///
    /// # Panics
    ///
    /// Panics on transport or decode errors.
    #[allow(clippy::expect_used)]
    pub async fn get_json(&self, path: &str) -> Value {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request")
            .json()
            .await
            .expect("JSON body")
    }

    /// POST a form; redirects are followed.
    ///
    /// # Panics
    ///
    /// Panics on transport errors.
    #[allow(clippy::expect_used)]
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request")
    }

    /// Add a product to the cart by ID.
    pub async fn add(&self, product_id: i32) -> Response {
        let id = product_id.to_string();
        self.post_form("/cart/add", &[("product_id", id.as_str())])
            .await
    }

    /// Set a product's quantity.
    pub async fn set_quantity(&self, product_id: i32, quantity: i64) -> Response {
        let id = product_id.to_string();
        let quantity = quantity.to_string();
        self.post_form(
            "/cart/update",
            &[("product_id", id.as_str()), ("quantity", quantity.as_str())],
        )
        .await
    }

    /// Current cart as `(product_id, quantity)` pairs, in cart order.
    pub async fn cart_lines(&self) -> Vec<(i64, i64)> {
        let cart = self.get_json("/api/cart").await;
        cart["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        Some((
                            item["product"]["id"].as_i64()?,
                            item["quantity"].as_i64()?,
                        ))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
