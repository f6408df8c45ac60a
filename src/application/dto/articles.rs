use crate::domain::article::{Article, ArticlePatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub number: i64,
    pub title: String,
    pub text: String,
    pub author: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            number: article.number.into(),
            title: article.title,
            text: article.text,
            author: article.author,
        }
    }
}

/// Partial article update. Absent (or `null`) fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticlePatchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl From<ArticlePatchDto> for ArticlePatch {
    fn from(dto: ArticlePatchDto) -> Self {
        Self {
            title: dto.title,
            text: dto.text,
            author: dto.author,
        }
    }
}
