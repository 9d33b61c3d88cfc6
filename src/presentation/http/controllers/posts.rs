// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PostDto, PostSummaryDto},
    queries::posts::{GetPostBySlugQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Admin, MaybeAdmin};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(default)]
    pub include_unpublished: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub post: PostDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub posts: Vec<PostSummaryDto>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(("include_unpublished" = Option<bool>, Query, description = "Include drafts (admin only).")),
    responses((status = 200, description = "Posts, newest first.", body = PostListResponse)),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    MaybeAdmin(admin): MaybeAdmin,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<PostListResponse>> {
    let posts = state
        .services
        .post_queries
        .list_posts(
            admin,
            ListPostsQuery {
                include_unpublished: params.include_unpublished,
            },
        )
        .await
        .into_http()?;

    Ok(Json(PostListResponse { posts }))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug.")),
    responses(
        (status = 200, description = "The post.", body = PostResponse),
        (status = 404, description = "Unknown slug, or a draft requested anonymously.")
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    MaybeAdmin(admin): MaybeAdmin,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostResponse>> {
    let post = state
        .services
        .post_queries
        .get_post_by_slug(admin, GetPostBySlugQuery { slug })
        .await
        .into_http()?;

    Ok(Json(PostResponse { post }))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created with computed slug and excerpt.", body = PostResponse),
        (status = 400, description = "Validation failure."),
        (status = 409, description = "Slug conflict unresolved after retry.")
    ),
    security(("admin_token" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    _admin: Admin,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostResponse>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        published: payload.published,
    };

    let post = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(PostResponse { post })))
}

#[utoipa::path(
    put,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Current slug of the post.")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post; slug recomputed when the title changed.", body = PostResponse),
        (status = 404, description = "Unknown slug."),
        (status = 409, description = "Slug conflict unresolved after retry.")
    ),
    security(("admin_token" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    _admin: Admin,
    Path(slug): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostResponse>> {
    let command = UpdatePostCommand {
        slug,
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        published: payload.published,
    };

    let post = state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()?;

    Ok(Json(PostResponse { post }))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Slug of the post to delete.")),
    responses(
        (status = 200, description = "Post deleted, slug freed."),
        (status = 404, description = "Unknown slug.")
    ),
    security(("admin_token" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    _admin: Admin,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { slug })
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
