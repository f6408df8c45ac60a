use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleNumber;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Stores a new article, assigning the next number when none is supplied.
    /// Fails with `DomainError::DuplicateIdentity` if the supplied number is taken.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Replaces the stored article with the same number.
    /// Fails with `DomainError::NotFound` if there is none.
    async fn update(&self, article: Article) -> DomainResult<Article>;
    /// Returns whether an article was actually removed.
    async fn delete(&self, number: ArticleNumber) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_number(&self, number: ArticleNumber) -> DomainResult<Option<Article>>;
    /// All stored articles in no particular order.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
}
