// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::PostSlug,
};

pub struct DeletePostCommand {
    pub slug: String,
}

impl PostCommandService {
    /// Delete the post holding `slug`. The slug binding is removed with the
    /// row, freeing it for a later unrelated post.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let slug = PostSlug::new(command.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.write_repo.delete(post.id).await?;
        tracing::info!(slug = %slug, "post deleted");
        Ok(())
    }
}
