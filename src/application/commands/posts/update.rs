// src/application/commands/posts/update.rs
use super::{service::supplied_excerpt, PostCommandService};
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        services::derive_excerpt, PostContent, PostExcerpt, PostSlug, PostTitle, PostUpdate,
    },
};

pub struct UpdatePostCommand {
    /// Current slug of the post being edited.
    pub slug: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub published: Option<bool>,
}

impl PostCommandService {
    /// Update a post addressed by its current slug. The slug is recomputed
    /// only when the provided title differs from the stored one; an update
    /// that does not touch the title never changes the slug, whatever the
    /// current store state would resolve to.
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(command.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let title_opt = command.title.map(PostTitle::new).transpose()?;
        let content_opt = command.content.map(PostContent::new).transpose()?;
        let excerpt_opt = supplied_excerpt(command.excerpt)
            .map(PostExcerpt::new)
            .transpose()?;

        let title_changed = title_opt.as_ref().is_some_and(|title| *title != post.title);

        let mut update = PostUpdate::new(post.id, self.clock.now());
        if let Some(title) = title_opt.clone() {
            update = update.with_title(title);
        }
        if let Some(content) = content_opt.clone() {
            update = update.with_content(content);
        }
        match (excerpt_opt, content_opt) {
            (Some(excerpt), _) => update = update.with_excerpt(excerpt),
            (None, Some(content)) => update = update.with_excerpt(derive_excerpt(content.as_str())),
            (None, None) => {}
        }
        if let Some(published) = command.published {
            update = update.with_published(published);
        }

        if !title_changed {
            if update.is_noop() {
                return Ok(post.into());
            }
            let updated = self.write_repo.update(update).await?;
            return Ok(updated.into());
        }

        // Invariant on this branch: title_changed implies a provided title.
        let title = title_opt.expect("changed title is present");
        let mut new_slug = self.slug_service.resolve(&title, Some(post.id)).await?;
        let mut retried = false;

        loop {
            let attempt = update.clone().with_slug(new_slug.clone());
            match self.write_repo.update(attempt).await {
                Ok(updated) => {
                    tracing::info!(old = %slug, new = %updated.slug, "post slug reassigned");
                    return Ok(updated.into());
                }
                Err(err) if err.is_conflict() && !retried => {
                    retried = true;
                    new_slug = self.slug_service.resolve(&title, Some(post.id)).await?;
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
