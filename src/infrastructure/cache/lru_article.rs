use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::application::ports::cache::{ArticleCache, CacheEpoch};
use crate::domain::article::{Article, ArticleNumber, ArticlePage};
use crate::infrastructure::sync::mutex_lock;

const SOURCE: &str = "cache::lru_article";

struct Tier<K: Hash + Eq, V: Clone> {
    entries: LruCache<K, V>,
    epoch: u64,
}

impl<K: Hash + Eq, V: Clone> Tier<K, V> {
    fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            epoch: 0,
        }
    }

    fn get(&mut self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: K, value: V, observed: CacheEpoch) -> bool {
        if observed.0 != self.epoch {
            return false;
        }
        self.entries.put(key, value);
        true
    }

    fn evict(&mut self, key: &K) {
        self.epoch = self.epoch.wrapping_add(1);
        self.entries.pop(key);
    }

    fn clear(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.entries.clear();
    }
}

pub struct LruArticleCache {
    articles: Mutex<Tier<ArticleNumber, Article>>,
    pages: Mutex<Tier<usize, ArticlePage>>,
}

impl LruArticleCache {
    pub fn new(article_capacity: NonZeroUsize, page_capacity: NonZeroUsize) -> Self {
        Self {
            articles: Mutex::new(Tier::new(article_capacity)),
            pages: Mutex::new(Tier::new(page_capacity)),
        }
    }

    pub fn article_count(&self) -> usize {
        mutex_lock(&self.articles, SOURCE, "article_count").entries.len()
    }

    pub fn page_count(&self) -> usize {
        mutex_lock(&self.pages, SOURCE, "page_count").entries.len()
    }
}

impl ArticleCache for LruArticleCache {
    fn article(&self, number: ArticleNumber) -> Option<Article> {
        mutex_lock(&self.articles, SOURCE, "article").get(&number)
    }

    fn article_epoch(&self) -> CacheEpoch {
        CacheEpoch(mutex_lock(&self.articles, SOURCE, "article_epoch").epoch)
    }

    fn put_article(&self, article: Article, observed: CacheEpoch) -> bool {
        mutex_lock(&self.articles, SOURCE, "put_article").put(article.number, article, observed)
    }

    fn evict_article(&self, number: ArticleNumber) {
        mutex_lock(&self.articles, SOURCE, "evict_article").evict(&number);
    }

    fn page(&self, index: usize) -> Option<ArticlePage> {
        mutex_lock(&self.pages, SOURCE, "page").get(&index)
    }

    fn page_epoch(&self) -> CacheEpoch {
        CacheEpoch(mutex_lock(&self.pages, SOURCE, "page_epoch").epoch)
    }

    fn put_page(&self, index: usize, page: ArticlePage, observed: CacheEpoch) -> bool {
        mutex_lock(&self.pages, SOURCE, "put_page").put(index, page, observed)
    }

    fn evict_pages(&self) {
        mutex_lock(&self.pages, SOURCE, "evict_pages").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> LruArticleCache {
        LruArticleCache::new(NonZeroUsize::new(2).unwrap(), NonZeroUsize::new(4).unwrap())
    }

    fn article(number: i64, title: &str) -> Article {
        Article {
            number: ArticleNumber::new(number).unwrap(),
            title: title.into(),
            text: "text".into(),
            author: "author".into(),
        }
    }

    fn page(numbers: &[i64]) -> ArticlePage {
        let content: Vec<Article> = numbers.iter().map(|n| article(*n, "t")).collect();
        ArticlePage {
            size: content.len(),
            content,
            total_pages: 1,
            current_page: 1,
            max_page_size: 10,
        }
    }

    #[test]
    fn fill_then_hit() {
        let cache = cache();
        let epoch = cache.article_epoch();
        assert!(cache.put_article(article(1, "a"), epoch));
        assert_eq!(cache.article(ArticleNumber::new(1).unwrap()), Some(article(1, "a")));
    }

    #[test]
    fn fill_after_eviction_is_discarded() {
        let cache = cache();
        let observed = cache.article_epoch();
        cache.evict_article(ArticleNumber::new(1).unwrap());
        assert!(!cache.put_article(article(1, "stale"), observed));
        assert!(cache.article(ArticleNumber::new(1).unwrap()).is_none());
    }

    #[test]
    fn evict_article_removes_only_that_entry() {
        let cache = cache();
        let epoch = cache.article_epoch();
        cache.put_article(article(1, "a"), epoch);
        cache.put_article(article(2, "b"), epoch);
        cache.evict_article(ArticleNumber::new(1).unwrap());
        assert!(cache.article(ArticleNumber::new(1).unwrap()).is_none());
        assert!(cache.article(ArticleNumber::new(2).unwrap()).is_some());
    }

    #[test]
    fn article_tier_is_bounded() {
        let cache = cache();
        let epoch = cache.article_epoch();
        for n in 1..=3 {
            cache.put_article(article(n, "x"), epoch);
        }
        assert_eq!(cache.article_count(), 2);
        assert!(cache.article(ArticleNumber::new(1).unwrap()).is_none());
    }

    #[test]
    fn evict_pages_clears_every_page() {
        let cache = cache();
        let epoch = cache.page_epoch();
        cache.put_page(0, page(&[1, 2]), epoch);
        cache.put_page(1, page(&[3]), epoch);
        assert_eq!(cache.page_count(), 2);
        cache.evict_pages();
        assert_eq!(cache.page_count(), 0);
        assert!(!cache.put_page(0, page(&[1]), epoch));
        assert!(cache.put_page(0, page(&[1]), cache.page_epoch()));
    }

    #[test]
    fn tiers_have_independent_epochs() {
        let cache = cache();
        let article_epoch = cache.article_epoch();
        cache.evict_pages();
        assert!(cache.put_article(article(1, "a"), article_epoch));
    }
}
