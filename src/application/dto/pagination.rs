use crate::application::dto::ArticleDto;
use crate::domain::article::ArticlePage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub count_pages: usize,
    pub current_page: usize,
    pub max_page_size: usize,
    pub size: usize,
}

impl From<ArticlePage> for PageDto<ArticleDto> {
    fn from(page: ArticlePage) -> Self {
        Self {
            content: page.content.into_iter().map(Into::into).collect(),
            count_pages: page.total_pages,
            current_page: page.current_page,
            max_page_size: page.max_page_size,
            size: page.size,
        }
    }
}
