use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use tracing::instrument;

pub struct GetArticleByNumberQuery {
    pub number: i64,
}

impl ArticleQueryService {
    #[instrument(skip_all, fields(number = query.number), err)]
    pub async fn get_article_by_number(
        &self,
        query: GetArticleByNumberQuery,
    ) -> ApplicationResult<ArticleDto> {
        self.load_article(query.number)
            .await?
            .map(Into::into)
            .ok_or(ApplicationError::NotFound(query.number))
    }
}
