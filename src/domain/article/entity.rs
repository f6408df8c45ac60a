// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub number: ArticleNumber,
    pub title: String,
    pub text: String,
    pub author: String,
}

/// An article that has not been stored yet. The store assigns `number` when
/// the caller leaves it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub number: Option<ArticleNumber>,
    pub title: String,
    pub text: String,
    pub author: String,
}

impl NewArticle {
    pub fn into_article(self, number: ArticleNumber) -> Article {
        Article {
            number,
            title: self.title,
            text: self.text,
            author: self.author,
        }
    }
}
