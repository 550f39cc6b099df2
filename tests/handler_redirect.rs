mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use redirector::api::handlers::{index_handler, redirect_handler};

fn app(state: redirector::AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_redirect_success() {
    let state = common::seeded_memory_state(&[("promo", "https://example.com/target")]).await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/promo").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let state = common::memory_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_root_serves_banner() {
    let state = common::memory_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("redirect"));
}
