use news_desk::application::{ports::ArticleCachePort, services::ApplicationServices};
use news_desk::config::AppConfig;
use news_desk::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use news_desk::infrastructure::{
    cache::LruArticleCache, repositories::InMemoryArticleRepository, seed,
};
use news_desk::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store = InMemoryArticleRepository::with_articles(seed::sample_articles(config.seed_count()))?;
    tracing::info!(articles = store.len(), "article store seeded");
    let store = Arc::new(store);

    let article_write_repo: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read_repo: Arc<dyn ArticleReadRepository> = store;
    let article_cache: Arc<ArticleCachePort> = Arc::new(LruArticleCache::new(
        config.article_cache_capacity(),
        config.page_cache_capacity(),
    ));

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        article_cache,
        config.page_size().get(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
