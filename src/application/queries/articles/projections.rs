// src/application/queries/articles/projections.rs
use super::ArticleQueryService;
use crate::application::error::{ApplicationError, ApplicationResult};
use tracing::instrument;

pub struct GetArticleTextQuery {
    pub number: i64,
}

pub struct GetArticleAuthorQuery {
    pub number: i64,
}

impl ArticleQueryService {
    #[instrument(skip_all, fields(number = query.number), err)]
    pub async fn get_article_text(&self, query: GetArticleTextQuery) -> ApplicationResult<String> {
        self.load_article(query.number)
            .await?
            .map(|article| article.text)
            .ok_or(ApplicationError::TextNotFound(query.number))
    }

    #[instrument(skip_all, fields(number = query.number), err)]
    pub async fn get_article_author(
        &self,
        query: GetArticleAuthorQuery,
    ) -> ApplicationResult<String> {
        self.load_article(query.number)
            .await?
            .map(|article| article.author)
            .ok_or(ApplicationError::AuthorNotFound(query.number))
    }
}
