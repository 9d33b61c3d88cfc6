// src/application/commands/posts/create.rs
use super::{service::supplied_excerpt, PostCommandService};
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{services::derive_excerpt, NewPost, PostContent, PostExcerpt, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
}

impl PostCommandService {
    /// Create a post, deriving slug and excerpt before anything is
    /// persisted. A slug lost to a concurrent writer (the uniqueness
    /// constraint fires on insert) is re-resolved and the insert retried
    /// exactly once; a second loss is surfaced as a conflict.
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let excerpt = match supplied_excerpt(command.excerpt) {
            Some(raw) => PostExcerpt::new(raw)?,
            None => derive_excerpt(content.as_str()),
        };

        let now = self.clock.now();
        let mut slug = self.slug_service.resolve(&title, None).await?;
        let mut retried = false;

        loop {
            let new_post = NewPost {
                title: title.clone(),
                slug: slug.clone(),
                content: content.clone(),
                excerpt: excerpt.clone(),
                published: command.published,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(created) => {
                    tracing::info!(slug = %created.slug, "post created");
                    return Ok(created.into());
                }
                Err(err) if err.is_conflict() && !retried => {
                    retried = true;
                    tracing::debug!(slug = %slug, "slug taken by concurrent writer, re-resolving");
                    slug = self.slug_service.resolve(&title, None).await?;
                }
                Err(err) if err.is_conflict() => {
                    return Err(ApplicationError::conflict(format!(
                        "could not assign a unique slug for title \"{title}\""
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
