// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::posts::PostCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::posts::PostQueryService,
    },
    domain::post::{services::PostSlugService, PostReadRepository, PostWriteRepository},
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            slug_service,
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(post_read_repo));

        Self {
            post_commands,
            post_queries,
        }
    }
}
