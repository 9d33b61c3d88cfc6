// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use inkpost::application::ports::time::Clock;
use inkpost::application::ports::util::SlugGenerator;
use inkpost::application::services::ApplicationServices;
use inkpost::domain::errors::{DomainError, DomainResult};
use inkpost::domain::post::{
    NewPost, Post, PostContent, PostExcerpt, PostId, PostReadRepository, PostSlug, PostTitle,
    PostUpdate, PostWriteRepository,
};
use inkpost::infrastructure::util::TitleSlugGenerator;

/// Clock pinned to a known instant so slug fallbacks and timestamps are
/// deterministic in assertions.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// In-memory post store enforcing the same slug uniqueness contract as the
/// Postgres repositories: a duplicate slug on insert or update is a
/// `DomainError::Conflict`, the write-path's retry trigger.
#[derive(Default)]
pub struct InMemoryPostRepository {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    posts: HashMap<i64, Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn post_count(&self) -> usize {
        self.inner.lock().unwrap().posts.len()
    }

    pub fn slugs(&self) -> Vec<String> {
        let store = self.inner.lock().unwrap();
        let mut slugs: Vec<String> = store
            .posts
            .values()
            .map(|post| post.slug.as_str().to_owned())
            .collect();
        slugs.sort();
        slugs
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        if store
            .posts
            .values()
            .any(|existing| existing.slug == post.slug)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        store.next_id += 1;
        let created = Post {
            id: PostId::new(store.next_id)?,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        let id = store.next_id;
        store.posts.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        let id = i64::from(update.id);

        if let Some(slug) = &update.slug {
            let taken = store
                .posts
                .values()
                .any(|other| i64::from(other.id) != id && other.slug == *slug);
            if taken {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let post = store
            .posts
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(published) = update.published {
            post.published = published;
        }
        post.updated_at = update.updated_at;

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store
            .posts
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .posts
            .values()
            .find(|post| post.slug == *slug)
            .cloned())
    }

    async fn list(&self, include_unpublished: bool) -> DomainResult<Vec<Post>> {
        let store = self.inner.lock().unwrap();
        let mut posts: Vec<Post> = store
            .posts
            .values()
            .filter(|post| include_unpublished || post.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(posts)
    }
}

pub fn sample_new_post(title: &str, slug: &str, at: DateTime<Utc>) -> NewPost {
    NewPost {
        title: PostTitle::new(title).unwrap(),
        slug: PostSlug::new(slug).unwrap(),
        content: PostContent::new("<p>seed content</p>").unwrap(),
        excerpt: PostExcerpt::new("seed content...").unwrap(),
        published: true,
        created_at: at,
        updated_at: at,
    }
}

/// Wire the full application service graph over an arbitrary write
/// repository and the shared in-memory read side.
pub fn services_over(
    write_repo: Arc<dyn PostWriteRepository>,
    read_repo: Arc<InMemoryPostRepository>,
) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_instant()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TitleSlugGenerator);
    ApplicationServices::new(write_repo, read_repo, clock, slugger)
}

pub fn services_in_memory(repo: Arc<InMemoryPostRepository>) -> ApplicationServices {
    services_over(Arc::clone(&repo) as Arc<dyn PostWriteRepository>, repo)
}
