pub mod articles;
pub mod pagination;

pub use articles::{ArticleDto, ArticlePatchDto};
pub use pagination::PageDto;
