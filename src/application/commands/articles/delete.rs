// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleNumber};
use tracing::instrument;

pub struct DeleteArticleCommand {
    pub number: i64,
}

impl ArticleCommandService {
    /// Returns whether an article was removed. Deleting a missing article is
    /// not an error and leaves the caches alone.
    #[instrument(skip_all, fields(number = command.number), err)]
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<bool> {
        let Ok(number) = ArticleNumber::new(command.number) else {
            return Ok(false);
        };

        let deleted = self.write_repo.delete(number).await?;
        if deleted {
            self.cache.on_deleted(number);
        }
        Ok(deleted)
    }
}
