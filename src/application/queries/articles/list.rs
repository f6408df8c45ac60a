use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PageDto},
        error::ApplicationResult,
    },
    domain::article::paginate,
};
use tracing::instrument;

pub struct ListArticlesQuery {
    /// Zero-based page index.
    pub page: usize,
}

impl ArticleQueryService {
    #[instrument(skip_all, fields(page = query.page), err)]
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PageDto<ArticleDto>> {
        if let Some(page) = self.cache.cached_page(query.page) {
            return Ok(page.into());
        }

        let epoch = self.cache.page_fill_epoch();
        let articles = self.read_repo.list_all().await?;
        let page = paginate(articles, query.page, self.page_size)?;
        self.cache.fill_page(query.page, &page, epoch);
        Ok(page.into())
    }
}
