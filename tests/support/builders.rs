// tests/support/builders.rs
use news_desk::application::commands::articles::CreateArticleCommand;
use news_desk::domain::article::{Article, ArticleNumber, NewArticle};

pub struct ArticleBuilder {
    number: i64,
    title: String,
    text: String,
    author: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            number: 1,
            title: "Antifragile. Things That Gain from Disorder".into(),
            text: "Just as human bones get stronger when subjected to stress and tension...".into(),
            author: "Nassim Nicholas Taleb".into(),
        }
    }

    pub fn number(mut self, number: i64) -> Self {
        self.number = number;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            number: ArticleNumber::new(self.number).unwrap(),
            title: self.title,
            text: self.text,
            author: self.author,
        }
    }

    /// The same fields as an unnumbered draft.
    pub fn draft(self) -> NewArticle {
        NewArticle {
            number: None,
            title: self.title,
            text: self.text,
            author: self.author,
        }
    }

    pub fn command(self) -> CreateArticleCommand {
        CreateArticleCommand::builder()
            .title(self.title)
            .text(self.text)
            .author(self.author)
            .build()
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
