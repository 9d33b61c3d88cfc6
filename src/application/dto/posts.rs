use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            content: post.content.into(),
            excerpt: post.excerpt.into(),
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Listing view: content is omitted, mirroring the public index which only
/// needs title, slug, and excerpt.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostSummaryDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            excerpt: post.excerpt.into(),
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
