use crate::domain::article::NewArticle;

const AUTHORS: [&str; 4] = [
    "Nassim Nicholas Taleb",
    "Maria Popova",
    "Ryszard Kapuscinski",
    "Svetlana Alexievich",
];

/// Generates `count` placeholder articles without numbers, so the store
/// numbers them `1..=count` in order.
pub fn sample_articles(count: usize) -> Vec<NewArticle> {
    (1..=count)
        .map(|n| NewArticle {
            number: None,
            title: format!("News #{n}"),
            text: format!("Body of news item #{n}."),
            author: AUTHORS[(n - 1) % AUTHORS.len()].to_string(),
        })
        .collect()
}
