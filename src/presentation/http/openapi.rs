// src/presentation/http/openapi.rs
use crate::application::dto::{PostDto, PostSummaryDto};
use crate::presentation::http::controllers::posts::{
    CreatePostRequest, PostListResponse, PostResponse, UpdatePostRequest,
};
use axum::Router;
use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

struct AdminTokenScheme;

impl Modify for AdminTokenScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_token",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "inkpost",
        description = "Blog platform API: public post reading plus token-gated authoring."
    ),
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
    ),
    components(schemas(
        StatusResponse,
        PostDto,
        PostSummaryDto,
        PostResponse,
        PostListResponse,
        CreatePostRequest,
        UpdatePostRequest,
    )),
    modifiers(&AdminTokenScheme),
    tags(
        (name = "System", description = "Service health."),
        (name = "Posts", description = "Post reading and authoring.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
