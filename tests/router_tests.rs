//! Router-level integration tests using `tower::ServiceExt::oneshot`.
//!
//! These tests exercise the HTTP layer (routing, middleware, response
//! headers) against the real router, without binding a socket. The template
//! engine loads from the crate's templates/ directory, which is the working
//! directory during `cargo test`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pulse::config::AppConfig;
use pulse::routes::create_router;
use pulse::state::AppState;
use pulse::templates::init_templates;

const TEST_CONFIG: &str = r#"
[http]
host = "127.0.0.1"
port = 3000

[ui]
site_name = "pulse test"
"#;

/// Build the full application router backed by a test configuration.
fn test_router() -> axum::Router {
    let config: AppConfig = toml::from_str(TEST_CONFIG).expect("parse test config");
    let tera = init_templates().expect("load templates");
    create_router(AppState::new(config, tera))
}

/// Send a request through a fresh router and return the response.
async fn send_request(method: &str, uri: &str) -> axum::http::Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    test_router().oneshot(request).await.expect("send request")
}

/// Collect the response body into bytes.
async fn body_bytes(response: axum::http::Response<Body>) -> axum::body::Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes()
}

fn header(response: &axum::http::Response<Body>, name: &str) -> String {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().expect("header is ASCII").to_owned())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Health endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_200_with_json() {
    let response = send_request("GET", "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = header(&response, "content-type");
    assert!(
        content_type.contains("application/json"),
        "Expected JSON content type, got: {content_type}"
    );

    let body: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).expect("parse body");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_body_is_exactly_status_ok() {
    let response = send_request("GET", "/health").await;

    let body: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).expect("parse body");
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_is_never_cached() {
    let response = send_request("GET", "/health").await;
    assert_eq!(header(&response, "cache-control"), "no-store");
}

#[tokio::test]
async fn health_rejects_post() {
    let response = send_request("POST", "/health").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_returns_200_with_html() {
    let response = send_request("GET", "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = header(&response, "content-type");
    assert!(
        content_type.contains("text/html"),
        "Expected HTML content type, got: {content_type}"
    );
}

#[tokio::test]
async fn index_shows_configured_site_name() {
    let response = send_request("GET", "/").await;

    let body = body_bytes(response).await;
    let html = std::str::from_utf8(&body).expect("body is UTF-8");
    assert!(html.contains("pulse test"));
}

#[tokio::test]
async fn index_sets_public_cache_control() {
    let response = send_request("GET", "/").await;

    let cache_control = header(&response, "cache-control");
    assert!(
        cache_control.contains("max-age="),
        "Expected a public cache policy, got: {cache_control}"
    );
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_health_requests_are_identical() {
    let first = send_request("GET", "/health").await;
    let second = send_request("GET", "/health").await;

    assert_eq!(first.status(), second.status());
    assert_eq!(body_bytes(first).await, body_bytes(second).await);
}

#[tokio::test]
async fn repeated_index_requests_are_identical() {
    let first = send_request("GET", "/").await;
    let second = send_request("GET", "/").await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(first.status(), second.status());
    assert_eq!(body_bytes(first).await, body_bytes(second).await);
}
