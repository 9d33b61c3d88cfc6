use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// An unpublished post reads as not-found to anonymous callers rather
    /// than leaking its existence.
    pub async fn get_post_by_slug(
        &self,
        admin: bool,
        query: GetPostBySlugQuery,
    ) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(query.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !post.published && !admin {
            return Err(ApplicationError::not_found("post not found"));
        }

        Ok(post.into())
    }
}
