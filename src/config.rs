// src/config.rs
use std::{env, num::NonZeroUsize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    page_size: NonZeroUsize,
    seed_count: usize,
    article_cache_capacity: NonZeroUsize,
    page_cache_capacity: NonZeroUsize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_SEED_COUNT: usize = 1000;
const DEFAULT_ARTICLE_CACHE_CAPACITY: usize = 1024;
const DEFAULT_PAGE_CACHE_CAPACITY: usize = 128;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn parse_usize(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer"))),
        Err(_) => Ok(default),
    }
}

fn parse_non_zero(key: &'static str, default: usize) -> Result<NonZeroUsize, ConfigError> {
    NonZeroUsize::new(parse_usize(key, default)?)
        .ok_or_else(|| ConfigError::Invalid(format!("{key} must be greater than zero")))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
            seed_count: DEFAULT_SEED_COUNT,
            article_cache_capacity: NonZeroUsize::new(DEFAULT_ARTICLE_CACHE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
            page_cache_capacity: NonZeroUsize::new(DEFAULT_PAGE_CACHE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let page_size = parse_non_zero("NEWS_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let seed_count = parse_usize("NEWS_SEED_COUNT", DEFAULT_SEED_COUNT)?;
        let article_cache_capacity =
            parse_non_zero("NEWS_CACHE_ARTICLE_CAPACITY", DEFAULT_ARTICLE_CACHE_CAPACITY)?;
        let page_cache_capacity =
            parse_non_zero("NEWS_CACHE_PAGE_CAPACITY", DEFAULT_PAGE_CACHE_CAPACITY)?;

        Ok(Self {
            listen_addr,
            page_size,
            seed_count,
            article_cache_capacity,
            page_cache_capacity,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Number of generated articles the store starts with.
    pub fn seed_count(&self) -> usize {
        self.seed_count
    }

    pub fn article_cache_capacity(&self) -> NonZeroUsize {
        self.article_cache_capacity
    }

    pub fn page_cache_capacity(&self) -> NonZeroUsize {
        self.page_cache_capacity
    }
}
