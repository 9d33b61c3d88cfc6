// tests/http_router.rs
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

mod support;

use inkpost::presentation::http::{routes::build_router, state::HttpState};
use support::mocks::{services_in_memory, InMemoryPostRepository};

const ADMIN_TOKEN: &str = "router-test-admin-token";
const ORIGIN: &str = "http://localhost:3000";

fn router() -> axum::Router {
    let repo = InMemoryPostRepository::new();
    let state = HttpState {
        services: Arc::new(services_in_memory(repo)),
        admin_token: Arc::from(ADMIN_TOKEN),
    };
    build_router(state, &[ORIGIN.to_string()])
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[tokio::test]
async fn health_is_public() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn anonymous_listing_is_public() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_without_token_is_unauthorized() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/posts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"Hello","content":"<p>x</p>"}"#))
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_token_is_rejected_even_on_reads() {
    let request = Request::builder()
        .uri("/api/posts")
        .header(header::AUTHORIZATION, bearer("not-the-admin-token"))
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_create_then_public_read_round_trips() {
    let app = router();

    let create = Request::builder()
        .method(Method::POST)
        .uri("/api/posts")
        .header(header::AUTHORIZATION, bearer(ADMIN_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"title":"Hello World!","content":"<p>body</p>"}"#,
        ))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let read = Request::builder()
        .uri("/api/posts/hello-world")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(read).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn preflight_reflects_configured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/posts")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("preflight response carries allow-origin");
    assert_eq!(allowed, ORIGIN);
}

#[tokio::test]
async fn preflight_ignores_unconfigured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/posts")
        .header(header::ORIGIN, "http://evil.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
