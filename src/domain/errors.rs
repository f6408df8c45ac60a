// src/domain/errors.rs
use crate::domain::article::ArticleNumber;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("News with number {0} - already exists")]
    DuplicateIdentity(ArticleNumber),
    #[error("article {0} not found")]
    NotFound(ArticleNumber),
    #[error("page {page} is out of range ({total_pages} pages available)")]
    PageOutOfRange { page: usize, total_pages: usize },
    #[error("article number sequence is exhausted")]
    SequenceExhausted,
}
