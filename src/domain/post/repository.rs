use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;

/// Write side of post storage. `insert` and `update` must enforce slug
/// uniqueness and report a violation as `DomainError::Conflict`.
#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    /// Newest first. `include_unpublished` widens the view to drafts.
    async fn list(&self, include_unpublished: bool) -> DomainResult<Vec<Post>>;
}
