// src/application/cache.rs
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::{ArticleCachePort, cache::CacheEpoch};
use crate::domain::article::{Article, ArticleNumber, ArticlePage};

/// Owns the invalidation rules for the two cached article views.
///
/// Readers ask for a cached value, and on a miss sample a fill epoch before
/// going to the store, then hand the result back with that epoch. Writers
/// call the matching `on_*` hook after the store accepted the mutation and
/// before returning to their caller, so an acknowledged write is never
/// followed by a read of the value it replaced.
pub struct CacheCoordinator {
    cache: Arc<ArticleCachePort>,
}

impl CacheCoordinator {
    pub fn new(cache: Arc<ArticleCachePort>) -> Self {
        Self { cache }
    }

    pub fn cached_article(&self, number: ArticleNumber) -> Option<Article> {
        let hit = self.cache.article(number);
        debug!(%number, hit = hit.is_some(), "article cache lookup");
        hit
    }

    pub fn article_fill_epoch(&self) -> CacheEpoch {
        self.cache.article_epoch()
    }

    pub fn fill_article(&self, article: &Article, observed: CacheEpoch) {
        let number = article.number;
        if !self.cache.put_article(article.clone(), observed) {
            debug!(%number, "discarded stale article cache fill");
        }
    }

    pub fn cached_page(&self, index: usize) -> Option<ArticlePage> {
        let hit = self.cache.page(index);
        debug!(page = index, hit = hit.is_some(), "page cache lookup");
        hit
    }

    pub fn page_fill_epoch(&self) -> CacheEpoch {
        self.cache.page_epoch()
    }

    pub fn fill_page(&self, index: usize, page: &ArticlePage, observed: CacheEpoch) {
        if !self.cache.put_page(index, page.clone(), observed) {
            debug!(page = index, "discarded stale page cache fill");
        }
    }

    /// A new article shifts every page boundary.
    pub fn on_saved(&self, number: ArticleNumber) {
        self.cache.evict_pages();
        debug!(%number, "invalidated pages after save");
    }

    pub fn on_updated(&self, number: ArticleNumber) {
        self.cache.evict_article(number);
        self.cache.evict_pages();
        debug!(%number, "invalidated article and pages after update");
    }

    pub fn on_deleted(&self, number: ArticleNumber) {
        self.cache.evict_article(number);
        self.cache.evict_pages();
        debug!(%number, "invalidated article and pages after delete");
    }
}
