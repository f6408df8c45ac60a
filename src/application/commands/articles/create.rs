// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleNumber, NewArticle},
};
use tracing::instrument;

/// Fields arrive as the client sent them; `title`, `text` and `author` are
/// checked for presence when the command runs.
#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub number: Option<i64>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub author: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    number: Option<i64>,
    title: Option<String>,
    text: Option<String>,
    author: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn number(mut self, number: i64) -> Self {
        self.number = Some(number);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            number: self.number,
            title: self.title,
            text: self.text,
            author: self.author,
        }
    }
}

fn required(value: Option<String>, field: &str) -> ApplicationResult<String> {
    value.ok_or_else(|| ApplicationError::validation(format!("{field} is required")))
}

impl ArticleCommandService {
    #[instrument(skip_all, fields(number = ?command.number), err)]
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let number = command.number.map(ArticleNumber::new).transpose()?;
        let new_article = NewArticle {
            number,
            title: required(command.title, "title")?,
            text: required(command.text, "text")?,
            author: required(command.author, "author")?,
        };

        let created = self.write_repo.insert(new_article).await?;
        self.cache.on_saved(created.number);
        tracing::info!(number = %created.number, "article created");
        Ok(created.into())
    }
}
