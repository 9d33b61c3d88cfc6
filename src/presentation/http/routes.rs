// src/presentation/http/routes.rs
use crate::presentation::http::controllers::posts;
use crate::presentation::http::openapi::{self, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Extension, Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/posts/{slug}",
            get(posts::get_post_by_slug)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
