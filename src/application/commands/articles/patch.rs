use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleNumber, ArticlePatch, merge},
};
use tracing::instrument;

pub struct PatchArticleCommand {
    pub number: i64,
    pub patch: ArticlePatch,
}

impl ArticleCommandService {
    #[instrument(skip_all, fields(number = command.number), err)]
    pub async fn patch_article(&self, command: PatchArticleCommand) -> ApplicationResult<ArticleDto> {
        let number = ArticleNumber::new(command.number)
            .map_err(|_| ApplicationError::NotFound(command.number))?;
        let existing = self
            .read_repo
            .find_by_number(number)
            .await?
            .ok_or(ApplicationError::NotFound(command.number))?;

        self.update_for_patch(existing, command.patch).await
    }

    /// Merges `patch` into `existing` and stores the result. Fails with
    /// `NotFound` if the article was deleted in the meantime.
    pub async fn update_for_patch(
        &self,
        existing: Article,
        patch: ArticlePatch,
    ) -> ApplicationResult<ArticleDto> {
        let merged = merge(&existing, &patch);
        let updated = self.write_repo.update(merged).await?;
        self.cache.on_updated(updated.number);
        Ok(updated.into())
    }
}
