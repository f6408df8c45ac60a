//! Reader-facing texts for each error kind.

use crate::application::error::ApplicationError;

pub const NO_NEWS_WITH_NUMBER: &str = "Нет новости с таким номером";
pub const NO_NEWS_WITH_PAGE_NUMBER: &str = "Нет страницы новости с таким номером";
pub const NO_NEWS_TEXT: &str = "Нет новости с таким номером либо текст новости отсутствует";
pub const NO_NEWS_AUTHOR: &str = "Нет новости с таким номером либо автор новости отсутствует";
pub const UPDATED: &str = "Обновлено";

pub fn message_for(err: &ApplicationError) -> String {
    match err {
        ApplicationError::NotFound(_) => NO_NEWS_WITH_NUMBER.to_string(),
        ApplicationError::PageOutOfRange { .. } => NO_NEWS_WITH_PAGE_NUMBER.to_string(),
        ApplicationError::TextNotFound(_) => NO_NEWS_TEXT.to_string(),
        ApplicationError::AuthorNotFound(_) => NO_NEWS_AUTHOR.to_string(),
        ApplicationError::DuplicateIdentity(_)
        | ApplicationError::Validation(_)
        | ApplicationError::Infrastructure(_) => err.to_string(),
    }
}
