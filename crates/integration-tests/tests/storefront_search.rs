//! Integration tests for catalog search over HTTP.

use shirt_store_integration_tests::TestContext;

fn product_ids(body: &serde_json::Value) -> Vec<i64> {
    body["products"]
        .as_array()
        .map(|products| products.iter().filter_map(|p| p["id"].as_i64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_no_query_lists_whole_catalog_in_order() {
    let ctx = TestContext::new().await;

    let body = ctx.get_json("/api/products").await;
    assert_eq!(body["query"], "");
    assert_eq!(body["count"], 8);
    assert_eq!(product_ids(&body), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn test_query_matches_name_description_and_category() {
    let ctx = TestContext::new().await;

    // "tee" appears in two names; "T-Shirts" does not contain "tee".
    ctx.post_form("/search", &[("q", "tee")]).await;
    assert_eq!(product_ids(&ctx.get_json("/api/products").await), vec![1, 2]);

    // Category match.
    ctx.post_form("/search", &[("q", "button-ups")]).await;
    assert_eq!(product_ids(&ctx.get_json("/api/products").await), vec![3, 4]);

    // Description match.
    ctx.post_form("/search", &[("q", "buffalo")]).await;
    assert_eq!(product_ids(&ctx.get_json("/api/products").await), vec![8]);
}

#[tokio::test]
async fn test_query_is_case_insensitive() {
    let ctx = TestContext::new().await;

    ctx.post_form("/search", &[("q", "long sleeve")]).await;
    let lower = product_ids(&ctx.get_json("/api/products").await);

    ctx.post_form("/search", &[("q", "LONG SLEEVE")]).await;
    let upper = product_ids(&ctx.get_json("/api/products").await);

    assert_eq!(lower, vec![6, 7]);
    assert_eq!(lower, upper);
}

#[tokio::test]
async fn test_query_is_not_trimmed() {
    let ctx = TestContext::new().await;

    // Both tee names end in "tee", so a trailing space matches nothing.
    ctx.post_form("/search", &[("q", "tee ")]).await;
    let body = ctx.get_json("/api/products").await;
    assert_eq!(body["query"], "tee ");
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_clear_query_restores_catalog() {
    let ctx = TestContext::new().await;

    ctx.post_form("/search", &[("q", "flannel")]).await;
    assert_eq!(ctx.get_json("/api/products").await["count"], 1);

    ctx.post_form("/search/clear", &[]).await;
    let body = ctx.get_json("/api/products").await;
    assert_eq!(body["query"], "");
    assert_eq!(body["count"], 8);
}

#[tokio::test]
async fn test_overlong_query_is_rejected() {
    let ctx = TestContext::new().await;

    let long = "x".repeat(201);
    let resp = ctx.post_form("/search", &[("q", long.as_str())]).await;
    assert_eq!(resp.status(), 400);

    assert_eq!(ctx.get_json("/api/products").await["query"], "");
}
