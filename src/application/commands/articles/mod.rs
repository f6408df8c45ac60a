// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod patch;
mod service;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use patch::PatchArticleCommand;
pub use service::ArticleCommandService;
