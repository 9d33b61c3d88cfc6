use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

/// Domain service responsible for producing unique slugs for posts.
///
/// Resolution is check-then-set: the returned slug is unique relative to the
/// store state visible through `read_repo` at probe time. The storage-level
/// uniqueness constraint remains the final arbiter under concurrent writes;
/// the command service retries resolution once when that constraint fires.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl PostSlugService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
        }
    }

    /// Resolve `title` into a slug that no other post currently holds.
    ///
    /// A title that normalizes to the empty string (all punctuation or
    /// whitespace) falls back to a clock-derived `post-{timestamp}` token.
    /// When the base slug is taken, `-1`, `-2`, ... suffixes are probed
    /// without an upper bound; collision chains are short in practice.
    /// `ignore_id` lets an update keep the slug it already owns.
    pub async fn resolve(
        &self,
        title: &PostTitle,
        ignore_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            format!("post-{}", self.clock.now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            let slug = PostSlug::new(candidate)?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id == Some(existing.id) => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
