// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::cache::CacheCoordinator,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) cache: Arc<CacheCoordinator>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        cache: Arc<CacheCoordinator>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            cache,
        }
    }
}
