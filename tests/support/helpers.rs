// tests/support/helpers.rs
use std::num::NonZeroUsize;
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use tower::util::ServiceExt as _;

use news_desk::application::services::ApplicationServices;
use news_desk::domain::article::{ArticleNumber, ArticleReadRepository, ArticleWriteRepository};
use news_desk::infrastructure::{
    cache::LruArticleCache, repositories::InMemoryArticleRepository, seed,
};
use news_desk::presentation::http::{routes::build_router, state::HttpState};

pub const PAGE_SIZE: usize = 10;

/// Services wired to a seeded in-memory store, with handles on the store and
/// cache so tests can look behind the service.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryArticleRepository>,
    pub cache: Arc<LruArticleCache>,
}

impl TestContext {
    pub fn seeded(count: usize) -> Self {
        let store = Arc::new(
            InMemoryArticleRepository::with_articles(seed::sample_articles(count))
                .expect("seed store"),
        );
        let cache = Arc::new(LruArticleCache::new(
            NonZeroUsize::new(64).unwrap(),
            NonZeroUsize::new(16).unwrap(),
        ));

        let write_repo: Arc<dyn ArticleWriteRepository> = store.clone();
        let read_repo: Arc<dyn ArticleReadRepository> = store.clone();
        let services = Arc::new(ApplicationServices::new(
            write_repo,
            read_repo,
            cache.clone(),
            PAGE_SIZE,
        ));

        Self {
            services,
            store,
            cache,
        }
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }
}

pub fn number(value: i64) -> ArticleNumber {
    ArticleNumber::new(value).expect("positive article number")
}

pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    json: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match json {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_text(resp: Response) -> (StatusCode, String) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn body_json(resp: Response) -> (StatusCode, serde_json::Value) {
    let (status, text) = body_text(resp).await;
    let json = serde_json::from_str(&text)
        .unwrap_or_else(|err| panic!("expected json body, got {text:?}: {err}"));
    (status, json)
}
