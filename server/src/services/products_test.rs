use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

use super::*;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn fetcher_for(base: &str) -> HttpProductFetcher {
    HttpProductFetcher::new(&CatalogConfig { api_url: base.to_owned() }).unwrap()
}

// =============================================================================
// PURE HELPERS
// =============================================================================

#[test]
fn products_endpoint_appends_api_path() {
    assert_eq!(products_endpoint("http://localhost:8080"), "http://localhost:8080/api/products");
    assert_eq!(products_endpoint("https://shop.test/"), "https://shop.test/api/products");
}

#[test]
fn parse_products_accepts_array() {
    let products = parse_products(r#"[{"id":1,"name":"A","price":10,"priceWithTax":11}]"#).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "A");
}

#[test]
fn parse_products_accepts_empty_array() {
    assert!(parse_products("[]").unwrap().is_empty());
}

#[test]
fn parse_products_rejects_non_array() {
    let err = parse_products(r#"{"products":[]}"#).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    let err = parse_products("not json").unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

// =============================================================================
// LIVE BACKEND
// =============================================================================

#[tokio::test]
async fn fetch_issues_one_get_and_returns_products() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route(
        "/api/products",
        get({
            let hits = hits.clone();
            move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    r#"[{"id":1,"name":"A","price":10,"priceWithTax":11},{"id":2,"name":"B","price":2.5,"priceWithTax":3}]"#
                }
            }
        }),
    );
    let base = serve(router).await;

    let products = fetcher_for(&base).fetch_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].name, "B");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetch_empty_array_is_ok() {
    let base = serve(Router::new().route("/api/products", get(|| async { "[]" }))).await;
    let products = fetcher_for(&base).fetch_products().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn fetch_non_success_status_reports_product_error() {
    let router = Router::new().route(
        "/api/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(router).await;

    let err = fetcher_for(&base).fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::ProductStatus { status: 500 }));
    assert_eq!(err.to_string(), "Error fetching products");
}

#[tokio::test]
async fn fetch_missing_route_reports_product_error() {
    let base = serve(Router::new()).await;
    let err = fetcher_for(&base).fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::ProductStatus { status: 404 }));
}

#[tokio::test]
async fn fetch_malformed_body_reports_decode_error() {
    let base = serve(Router::new().route("/api/products", get(|| async { "<html></html>" }))).await;
    let err = fetcher_for(&base).fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn fetch_unreachable_backend_reports_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher_for(&format!("http://{addr}")).fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
}
