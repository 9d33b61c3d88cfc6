use super::PostQueryService;
use crate::application::{dto::PostSummaryDto, error::ApplicationResult};

pub struct ListPostsQuery {
    /// Widen the listing to drafts. Honored only for the admin; anonymous
    /// callers always get the published-only view.
    pub include_unpublished: bool,
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        admin: bool,
        query: ListPostsQuery,
    ) -> ApplicationResult<Vec<PostSummaryDto>> {
        let include_unpublished = admin && query.include_unpublished;
        let posts = self.read_repo.list(include_unpublished).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
