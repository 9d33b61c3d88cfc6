// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostContent, PostExcerpt, PostId, PostSlug, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: PostExcerpt,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: PostExcerpt,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied to an existing post. Only the set fields are
/// written; `updated_at` is always refreshed.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub content: Option<PostContent>,
    pub excerpt: Option<PostExcerpt>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            published: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: PostExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.published.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_builder_sets_fields() {
        let now = Utc::now();
        let update = PostUpdate::new(PostId::new(1).unwrap(), now)
            .with_title(PostTitle::new("new title").unwrap())
            .with_published(false);
        assert!(update.title.is_some());
        assert!(update.slug.is_none());
        assert_eq!(update.published, Some(false));
        assert_eq!(update.updated_at, now);
        assert!(!update.is_noop());
    }

    #[test]
    fn empty_update_is_noop() {
        let update = PostUpdate::new(PostId::new(1).unwrap(), Utc::now());
        assert!(update.is_noop());
    }
}
