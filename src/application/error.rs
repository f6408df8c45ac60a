// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("article {0} not found")]
    NotFound(i64),

    #[error("page {page} is out of range ({total_pages} pages available)")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("text of article {0} not found")]
    TextNotFound(i64),

    #[error("author of article {0} not found")]
    AuthorNotFound(i64),

    #[error("News with number {0} - already exists")]
    DuplicateIdentity(i64),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::DuplicateIdentity(number) => Self::DuplicateIdentity(number.into()),
            DomainError::NotFound(number) => Self::NotFound(number.into()),
            DomainError::PageOutOfRange { page, total_pages } => {
                Self::PageOutOfRange { page, total_pages }
            }
            err @ DomainError::SequenceExhausted => Self::Infrastructure(err.to_string()),
        }
    }
}
