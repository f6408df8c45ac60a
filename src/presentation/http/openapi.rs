// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::news::create_news,
        crate::presentation::http::controllers::news::delete_news,
        crate::presentation::http::controllers::news::get_news,
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::patch_news,
        crate::presentation::http::controllers::news::get_news_text,
        crate::presentation::http::controllers::news::get_news_author,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::controllers::news::CreateNewsRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticlePatchDto
        )
    ),
    tags(
        (name = "News", description = "News article endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "News Desk API",
        description = "In-memory news article service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/redoc") }))
}

/// Where the snapshot binary writes the document, `OPENAPI_SNAPSHOT_PATH`
/// overriding the default.
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
