use crate::domain::article::{
    Article, ArticleNumber, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::sync::{rw_read, rw_write};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

const SOURCE: &str = "repositories::in_memory_article";

#[derive(Debug, Default)]
struct ArticleTable {
    rows: HashMap<ArticleNumber, Article>,
    // highest number ever stored; deletions never lower it
    last_number: Option<ArticleNumber>,
}

impl ArticleTable {
    fn insert(&mut self, article: NewArticle) -> DomainResult<Article> {
        let number = match article.number {
            Some(number) if self.rows.contains_key(&number) => {
                return Err(DomainError::DuplicateIdentity(number));
            }
            Some(number) => number,
            None => self.next_number()?,
        };

        self.last_number = self.last_number.max(Some(number));
        let stored = article.into_article(number);
        self.rows.insert(number, stored.clone());
        Ok(stored)
    }

    fn next_number(&self) -> DomainResult<ArticleNumber> {
        match self.last_number {
            None => Ok(ArticleNumber::FIRST),
            Some(last) => last.checked_next().ok_or(DomainError::SequenceExhausted),
        }
    }
}

/// Memory-resident article store. A single `RwLock` guards the whole table:
/// writers are mutually exclusive with each other and with readers, readers
/// get cloned snapshots.
#[derive(Clone, Default)]
pub struct InMemoryArticleRepository {
    table: Arc<RwLock<ArticleTable>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `articles`, inserted in order.
    pub fn with_articles(articles: impl IntoIterator<Item = NewArticle>) -> DomainResult<Self> {
        let mut table = ArticleTable::default();
        for article in articles {
            table.insert(article)?;
        }
        Ok(Self {
            table: Arc::new(RwLock::new(table)),
        })
    }

    pub fn len(&self) -> usize {
        rw_read(&self.table, SOURCE, "len").rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        rw_write(&self.table, SOURCE, "insert").insert(article)
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let mut table = rw_write(&self.table, SOURCE, "update");
        match table.rows.get_mut(&article.number) {
            Some(row) => {
                *row = article.clone();
                Ok(article)
            }
            None => Err(DomainError::NotFound(article.number)),
        }
    }

    async fn delete(&self, number: ArticleNumber) -> DomainResult<bool> {
        Ok(rw_write(&self.table, SOURCE, "delete")
            .rows
            .remove(&number)
            .is_some())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_number(&self, number: ArticleNumber) -> DomainResult<Option<Article>> {
        Ok(rw_read(&self.table, SOURCE, "find_by_number")
            .rows
            .get(&number)
            .cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(rw_read(&self.table, SOURCE, "list_all")
            .rows
            .values()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> NewArticle {
        NewArticle {
            number: None,
            title: title.into(),
            text: format!("{title} text"),
            author: format!("{title} author"),
        }
    }

    fn number(value: i64) -> ArticleNumber {
        ArticleNumber::new(value).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_sequential_numbers() {
        let repo = InMemoryArticleRepository::new();
        let first = repo.insert(draft("a")).await.unwrap();
        let second = repo.insert(draft("b")).await.unwrap();
        assert_eq!(first.number.value(), 1);
        assert_eq!(second.number.value(), 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn numbers_are_not_reused_after_delete() {
        let repo = InMemoryArticleRepository::with_articles([draft("a"), draft("b")]).unwrap();
        assert!(repo.delete(number(2)).await.unwrap());
        let next = repo.insert(draft("c")).await.unwrap();
        assert_eq!(next.number.value(), 3);
    }

    #[tokio::test]
    async fn duplicate_number_is_rejected() {
        let repo = InMemoryArticleRepository::with_articles([draft("a"), draft("b")]).unwrap();
        let mut duplicate = draft("dup");
        duplicate.number = Some(number(2));
        let err = repo.insert(duplicate).await.unwrap_err();
        assert_eq!(err, DomainError::DuplicateIdentity(number(2)));
        assert_eq!(err.to_string(), "News with number 2 - already exists");
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn supplied_number_advances_sequence() {
        let repo = InMemoryArticleRepository::new();
        let mut explicit = draft("explicit");
        explicit.number = Some(number(10));
        repo.insert(explicit).await.unwrap();
        let next = repo.insert(draft("next")).await.unwrap();
        assert_eq!(next.number.value(), 11);
    }

    #[tokio::test]
    async fn sequence_exhaustion_is_an_error_not_a_wrap() {
        let repo = InMemoryArticleRepository::new();
        let mut last = draft("last");
        last.number = Some(number(i64::MAX));
        repo.insert(last).await.unwrap();

        let err = repo.insert(draft("overflow")).await.unwrap_err();
        assert_eq!(err, DomainError::SequenceExhausted);
        assert_eq!(repo.len(), 1);

        let mut explicit = draft("explicit");
        explicit.number = Some(number(7));
        let stored = repo.insert(explicit).await.unwrap();
        assert_eq!(stored.number.value(), 7);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn second_delete_returns_false() {
        let repo = InMemoryArticleRepository::with_articles([draft("a"), draft("b")]).unwrap();
        assert!(repo.delete(number(1)).await.unwrap());
        assert!(!repo.delete(number(1)).await.unwrap());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_existing_row() {
        let repo = InMemoryArticleRepository::with_articles([draft("a")]).unwrap();
        let mut article = repo.find_by_number(number(1)).await.unwrap().unwrap();
        article.title = "changed".into();
        repo.update(article.clone()).await.unwrap();
        let stored = repo.find_by_number(number(1)).await.unwrap().unwrap();
        assert_eq!(stored, article);
    }

    #[tokio::test]
    async fn update_of_missing_article_fails() {
        let repo = InMemoryArticleRepository::new();
        let ghost = draft("ghost").into_article(number(5));
        let err = repo.update(ghost).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound(number(5)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn list_all_returns_every_article() {
        let repo =
            InMemoryArticleRepository::with_articles([draft("a"), draft("b"), draft("c")]).unwrap();
        let mut numbers: Vec<i64> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.number.value())
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
