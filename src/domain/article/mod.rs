pub mod entity;
pub mod pagination;
pub mod patch;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use pagination::{ArticlePage, paginate};
pub use patch::{ArticlePatch, merge};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::ArticleNumber;
