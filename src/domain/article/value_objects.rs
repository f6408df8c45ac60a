use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleNumber(i64);

impl ArticleNumber {
    pub const FIRST: Self = Self(1);

    pub fn new(number: i64) -> DomainResult<Self> {
        if number <= 0 {
            Err(DomainError::Validation(
                "article number must be positive".into(),
            ))
        } else {
            Ok(Self(number))
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// The number following this one in the store's sequence, or `None`
    /// once `i64::MAX` has been handed out.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ArticleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ArticleNumber> for i64 {
    fn from(value: ArticleNumber) -> Self {
        value.0
    }
}

impl TryFrom<i64> for ArticleNumber {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
