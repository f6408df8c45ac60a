// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        cache::CacheCoordinator, commands::articles::ArticleCommandService,
        ports::ArticleCachePort, queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

/// The article service: command and query halves sharing one store and one
/// cache coordinator.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_cache: Arc<ArticleCachePort>,
        page_size: usize,
    ) -> Self {
        let cache = Arc::new(CacheCoordinator::new(article_cache));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&cache),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            cache,
            page_size,
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
