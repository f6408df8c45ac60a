// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, PatchArticleCommand},
    dto::{ArticleDto, ArticlePatchDto, PageDto},
    queries::articles::{
        GetArticleAuthorQuery, GetArticleByNumberQuery, GetArticleTextQuery, ListArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::messages::UPDATED;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNewsRequest {
    /// Leave empty to let the store assign the next number.
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewsPageParams {
    /// Zero-based page index.
    pub page: usize,
}

#[utoipa::path(
    post,
    path = "/news",
    request_body = CreateNewsRequest,
    responses(
        (status = 201, description = "Article created."),
        (status = 400, description = "Duplicate number or missing field.", body = String)
    ),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateNewsRequest>,
) -> HttpResult<StatusCode> {
    let command = CreateArticleCommand {
        number: payload.number,
        title: payload.title,
        text: payload.text,
        author: payload.author,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .map_err(HttpError::bad_request)?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    delete,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "Article number")),
    responses(
        (status = 200, description = "Article deleted.", body = bool),
        (status = 404, description = "No such article.", body = bool)
    ),
    tag = "News"
)]
pub async fn delete_news(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<(StatusCode, Json<bool>)> {
    let deleted = state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { number: id })
        .await
        .into_http()?;

    let status = if deleted {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(deleted)))
}

#[utoipa::path(
    get,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "Article number")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = String)
    ),
    tag = "News"
)]
pub async fn get_news(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_number(GetArticleByNumberQuery { number: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news",
    params(NewsPageParams),
    responses(
        (status = 200, description = "One page of articles ordered by number.", body = PageDto<ArticleDto>),
        (status = 404, description = "Page index past the last page.", body = String)
    ),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NewsPageParams>,
) -> HttpResult<Json<PageDto<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "Article number")),
    request_body = ArticlePatchDto,
    responses(
        (status = 200, description = "Article updated.", body = String),
        (status = 404, description = "No such article.", body = String)
    ),
    tag = "News"
)]
pub async fn patch_news(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ArticlePatchDto>,
) -> HttpResult<&'static str> {
    let command = PatchArticleCommand {
        number: id,
        patch: payload.into(),
    };

    state
        .services
        .article_commands
        .patch_article(command)
        .await
        .into_http()?;

    Ok(UPDATED)
}

#[utoipa::path(
    get,
    path = "/news/{id}/text",
    params(("id" = i64, Path, description = "Article number")),
    responses(
        (status = 200, description = "Article text.", body = String),
        (status = 404, description = "No such article.", body = String)
    ),
    tag = "News"
)]
pub async fn get_news_text(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<String> {
    state
        .services
        .article_queries
        .get_article_text(GetArticleTextQuery { number: id })
        .await
        .into_http()
}

#[utoipa::path(
    get,
    path = "/news/{id}/author",
    params(("id" = i64, Path, description = "Article number")),
    responses(
        (status = 200, description = "Article author.", body = String),
        (status = 404, description = "No such article.", body = String)
    ),
    tag = "News"
)]
pub async fn get_news_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<String> {
    state
        .services
        .article_queries
        .get_article_author(GetArticleAuthorQuery { number: id })
        .await
        .into_http()
}
