// src/domain/article/pagination.rs
use crate::domain::article::entity::Article;
use crate::domain::errors::{DomainError, DomainResult};

/// One page of articles ordered by number, plus the page-count metadata
/// shown to readers. `current_page` is one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    pub content: Vec<Article>,
    pub total_pages: usize,
    pub current_page: usize,
    pub max_page_size: usize,
    pub size: usize,
}

/// Slices `articles` into the zero-based page `page_index`.
///
/// The bound check is `total_pages < page_index`, so asking for the page
/// right after the last one is accepted and yields an empty page. Only
/// indexes strictly past `total_pages` are rejected.
pub fn paginate(
    mut articles: Vec<Article>,
    page_index: usize,
    page_size: usize,
) -> DomainResult<ArticlePage> {
    if page_size == 0 {
        return Err(DomainError::Validation("page size must be positive".into()));
    }

    let total_pages = articles.len().div_ceil(page_size);
    if total_pages < page_index {
        return Err(DomainError::PageOutOfRange {
            page: page_index,
            total_pages,
        });
    }

    articles.sort_by_key(|article| article.number);
    let content: Vec<Article> = articles
        .into_iter()
        .skip(page_size.saturating_mul(page_index))
        .take(page_size)
        .collect();

    Ok(ArticlePage {
        size: content.len(),
        content,
        total_pages,
        current_page: page_index + 1,
        max_page_size: page_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleNumber;

    fn article(number: i64) -> Article {
        Article {
            number: ArticleNumber::new(number).unwrap(),
            title: format!("title {number}"),
            text: format!("text {number}"),
            author: format!("author {number}"),
        }
    }

    // reversed so the sort is actually exercised
    fn articles(count: i64) -> Vec<Article> {
        (1..=count).rev().map(article).collect()
    }

    fn numbers(page: &ArticlePage) -> Vec<i64> {
        page.content.iter().map(|a| a.number.value()).collect()
    }

    #[test]
    fn first_page_is_full_and_sorted() {
        let page = paginate(articles(12), 0, 10).unwrap();
        assert_eq!(numbers(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.max_page_size, 10);
        assert_eq!(page.size, 10);
    }

    #[test]
    fn last_page_is_partial() {
        let page = paginate(articles(12), 1, 10).unwrap();
        assert_eq!(numbers(&page), vec![11, 12]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.size, 2);
    }

    #[test]
    fn page_equal_to_total_pages_is_empty() {
        let page = paginate(articles(12), 2, 10).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.size, 0);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn exact_multiple_accepts_next_index() {
        let page = paginate(articles(10), 1, 10).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.size, 0);
    }

    #[test]
    fn page_past_total_is_rejected() {
        let err = paginate(articles(12), 3, 10).unwrap_err();
        assert_eq!(
            err,
            DomainError::PageOutOfRange {
                page: 3,
                total_pages: 2
            }
        );
    }

    #[test]
    fn empty_store_has_zero_pages() {
        let page = paginate(Vec::new(), 0, 10).unwrap();
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.size, 0);
        assert!(paginate(Vec::new(), 1, 10).is_err());
    }

    #[test]
    fn paginate_is_idempotent() {
        let snapshot = articles(25);
        let first = paginate(snapshot.clone(), 1, 10).unwrap();
        let second = paginate(snapshot, 1, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_page_size_is_invalid() {
        assert!(matches!(
            paginate(articles(3), 0, 0),
            Err(DomainError::Validation(_))
        ));
    }
}
