// src/infrastructure/repositories/postgres_post.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostExcerpt, PostId, PostReadRepository, PostSlug, PostTitle,
    PostUpdate, PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, content, excerpt, published, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            excerpt: PostExcerpt::new(row.excerpt)?,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            excerpt,
            published,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, content, excerpt, published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, title, slug, content, excerpt, published, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt.as_str())
        .bind(published)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            published,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }

        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(String::from(excerpt));
        }

        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, content, excerpt, published, created_at, updated_at
             FROM posts WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, include_unpublished: bool) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(POST_COLUMNS);
        builder.push(" FROM posts");
        if !include_unpublished {
            builder.push(" WHERE published = TRUE");
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
