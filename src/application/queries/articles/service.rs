use std::sync::Arc;

use crate::{
    application::{cache::CacheCoordinator, error::ApplicationResult},
    domain::article::{Article, ArticleNumber, ArticleReadRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) cache: Arc<CacheCoordinator>,
    pub(super) page_size: usize,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        cache: Arc<CacheCoordinator>,
        page_size: usize,
    ) -> Self {
        Self {
            read_repo,
            cache,
            page_size,
        }
    }

    /// Cache-checked lookup shared by the single-article queries.
    /// Non-positive numbers never exist.
    pub(super) async fn load_article(&self, raw: i64) -> ApplicationResult<Option<Article>> {
        let Ok(number) = ArticleNumber::new(raw) else {
            return Ok(None);
        };

        if let Some(article) = self.cache.cached_article(number) {
            return Ok(Some(article));
        }

        let epoch = self.cache.article_fill_epoch();
        let article = self.read_repo.find_by_number(number).await?;
        if let Some(article) = &article {
            self.cache.fill_article(article, epoch);
        }
        Ok(article)
    }
}
