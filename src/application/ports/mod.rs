// src/application/ports/mod.rs
pub mod cache;

pub type ArticleCachePort = dyn cache::ArticleCache;
