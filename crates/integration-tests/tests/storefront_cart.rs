//! Integration tests for cart operations over HTTP.
//!
//! Every mutation is a form post that redirects back to `/`; state is read
//! back through `/api/cart`.

use shirt_store_integration_tests::TestContext;

// =============================================================================
// Add
// =============================================================================

#[tokio::test]
async fn test_new_session_has_empty_cart() {
    let ctx = TestContext::new().await;

    let cart = ctx.get_json("/api/cart").await;
    assert_eq!(cart["total_count"], 0);
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(0));
    assert!(cart.get("subtotal").is_none());
    assert_eq!(cart["display"], "catalog");
}

#[tokio::test]
async fn test_add_appends_then_increments() {
    let ctx = TestContext::new().await;

    let resp = ctx.add(1).await;
    assert!(resp.status().is_success());
    assert_eq!(ctx.cart_lines().await, vec![(1, 1)]);

    ctx.add(3).await;
    ctx.add(1).await;
    assert_eq!(ctx.cart_lines().await, vec![(1, 2), (3, 1)]);

    let cart = ctx.get_json("/api/cart").await;
    assert_eq!(cart["total_count"], 3);
    // 2 x $19.99 + $54.00
    assert_eq!(cart["subtotal"], "$93.98");
}

/// Fire `count` adds of `product_id` at once, all on the context's session.
async fn add_concurrently(ctx: &TestContext, product_id: i32, count: usize) -> Vec<u16> {
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..count {
        let client = ctx.client.clone();
        let url = ctx.url("/cart/add");
        let id = product_id.to_string();
        tasks.spawn(async move {
            client
                .post(url)
                .form(&[("product_id", id.as_str())])
                .send()
                .await
                .map(|resp| resp.status().as_u16())
                .unwrap_or(0)
        });
    }

    let mut statuses = Vec::with_capacity(count);
    while let Some(status) = tasks.join_next().await {
        statuses.push(status.unwrap_or(0));
    }
    statuses
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_adds_on_one_session_all_count() {
    let ctx = TestContext::new().await;

    // Establish the session before the burst.
    ctx.add(1).await;

    let statuses = add_concurrently(&ctx, 1, 400).await;
    assert!(statuses.iter().all(|status| *status == 200), "{statuses:?}");

    assert_eq!(ctx.cart_lines().await, vec![(1, 401)]);
    let cart = ctx.get_json("/api/cart").await;
    assert_eq!(cart["total_count"], 401);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_adds_of_different_products_all_land() {
    let ctx = TestContext::new().await;
    ctx.add(2).await;

    let (shirts, tees) = tokio::join!(
        add_concurrently(&ctx, 3, 100),
        add_concurrently(&ctx, 2, 100)
    );
    assert!(shirts.iter().chain(&tees).all(|status| *status == 200));

    let mut lines = ctx.cart_lines().await;
    lines.sort_unstable();
    assert_eq!(lines, vec![(2, 101), (3, 100)]);
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let ctx = TestContext::new().await;

    let resp = ctx.add(999).await;
    assert_eq!(resp.status(), 404);
    assert!(ctx.cart_lines().await.is_empty());
}

#[tokio::test]
async fn test_add_with_malformed_id_is_rejected() {
    let ctx = TestContext::new().await;

    let resp = ctx.post_form("/cart/add", &[("product_id", "abc")]).await;
    assert!(resp.status().is_client_error());
}

// =============================================================================
// Update / Remove / Clear
// =============================================================================

#[tokio::test]
async fn test_set_quantity_replaces_in_place() {
    let ctx = TestContext::new().await;
    ctx.add(2).await;
    ctx.add(5).await;

    ctx.set_quantity(2, 4).await;

    assert_eq!(ctx.cart_lines().await, vec![(2, 4), (5, 1)]);
}

#[tokio::test]
async fn test_set_quantity_zero_removes_line() {
    let ctx = TestContext::new().await;
    ctx.add(2).await;
    ctx.add(5).await;

    ctx.set_quantity(2, 0).await;
    assert_eq!(ctx.cart_lines().await, vec![(5, 1)]);

    ctx.set_quantity(5, -1).await;
    assert!(ctx.cart_lines().await.is_empty());
}

#[tokio::test]
async fn test_set_quantity_never_inserts() {
    let ctx = TestContext::new().await;
    ctx.add(2).await;

    let resp = ctx.set_quantity(7, 3).await;
    assert!(resp.status().is_success());

    assert_eq!(ctx.cart_lines().await, vec![(2, 1)]);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let ctx = TestContext::new().await;
    ctx.add(1).await;
    ctx.add(2).await;

    ctx.post_form("/cart/remove", &[("product_id", "1")]).await;
    let after_first = ctx.cart_lines().await;

    let resp = ctx.post_form("/cart/remove", &[("product_id", "1")]).await;
    assert!(resp.status().is_success());
    assert_eq!(ctx.cart_lines().await, after_first);
    assert_eq!(after_first, vec![(2, 1)]);
}

#[tokio::test]
async fn test_clear_empties_cart() {
    let ctx = TestContext::new().await;
    ctx.add(1).await;
    ctx.add(1).await;
    ctx.add(4).await;

    ctx.post_form("/cart/clear", &[]).await;

    let cart = ctx.get_json("/api/cart").await;
    assert_eq!(cart["total_count"], 0);
    assert!(ctx.cart_lines().await.is_empty());
}

// =============================================================================
// Badge / Sessions
// =============================================================================

#[tokio::test]
async fn test_cart_count_fragment() {
    let ctx = TestContext::new().await;
    ctx.add(1).await;
    ctx.add(1).await;
    ctx.add(6).await;

    let fragment = ctx.get_text("/cart/count").await;
    assert_eq!(fragment.trim(), r#"<span id="cart-count">3</span>"#);
}

#[tokio::test]
async fn test_carts_are_per_session() {
    let ctx = TestContext::new().await;
    ctx.add(1).await;

    let other = TestContext {
        client: TestContext::new_client(),
        base_url: ctx.base_url.clone(),
    };
    assert!(other.cart_lines().await.is_empty());

    other.add(8).await;
    assert_eq!(ctx.cart_lines().await, vec![(1, 1)]);
    assert_eq!(other.cart_lines().await, vec![(8, 1)]);
}
