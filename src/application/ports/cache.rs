// src/application/ports/cache.rs
use crate::domain::article::{Article, ArticleNumber, ArticlePage};

/// Generation counter of one cache tier. Every invalidation of the tier
/// advances it; a fill is only accepted if the tier is still at the epoch
/// the reader observed before it went to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEpoch(pub u64);

/// Storage for the two cached article views: single articles by number and
/// list pages by zero-based index.
pub trait ArticleCache: Send + Sync {
    fn article(&self, number: ArticleNumber) -> Option<Article>;
    fn article_epoch(&self) -> CacheEpoch;
    /// Returns `false` when the fill was discarded as stale.
    fn put_article(&self, article: Article, observed: CacheEpoch) -> bool;
    fn evict_article(&self, number: ArticleNumber);

    fn page(&self, index: usize) -> Option<ArticlePage>;
    fn page_epoch(&self) -> CacheEpoch;
    /// Returns `false` when the fill was discarded as stale.
    fn put_page(&self, index: usize, page: ArticlePage, observed: CacheEpoch) -> bool;
    fn evict_pages(&self);
}
