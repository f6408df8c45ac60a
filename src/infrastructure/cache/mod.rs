//! In-memory cache tiers backing the article cache port.
//!
//! Both tiers are bounded LRU maps. Each tier carries an epoch that every
//! invalidation advances, so a fill computed from a store read that raced
//! with a write is dropped instead of resurrecting stale data.

mod lru_article;

pub use lru_article::LruArticleCache;
