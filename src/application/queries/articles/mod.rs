mod get_by_number;
mod list;
mod projections;
mod service;

pub use get_by_number::GetArticleByNumberQuery;
pub use list::ListArticlesQuery;
pub use projections::{GetArticleAuthorQuery, GetArticleTextQuery};
pub use service::ArticleQueryService;
