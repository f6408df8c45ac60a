use crate::domain::article::entity::Article;

/// Field-wise partial update. `None` means "leave as is"; `Some("")` is a
/// real update to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub text: Option<String>,
    pub author: Option<String>,
}

impl ArticlePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.author.is_none()
    }
}

/// Applies `patch` on top of `existing`. The number always comes from `existing`.
pub fn merge(existing: &Article, patch: &ArticlePatch) -> Article {
    Article {
        number: existing.number,
        title: patch.title.clone().unwrap_or_else(|| existing.title.clone()),
        text: patch.text.clone().unwrap_or_else(|| existing.text.clone()),
        author: patch.author.clone().unwrap_or_else(|| existing.author.clone()),
    }
}
