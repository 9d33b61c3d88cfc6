// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::post::{services::PostSlugService, PostReadRepository, PostWriteRepository},
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}

/// An excerpt counts as supplied only when it has visible text; editor
/// forms submit "" for an untouched field, which falls through to
/// derivation.
pub(super) fn supplied_excerpt(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}
