use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::{Article, ArticleInput, MessageResponse};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/articles", tag = "articles",
    request_body = crate::openapi::ArticleInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Database error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ArticleInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), JsonApiError> {
    let Json(input) = payload?;
    state.articles.create(&input).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Article created successfully"))))
}

#[utoipa::path(
    get, path = "/articles", tag = "articles",
    responses(
        (status = 200, description = "Every article", body = [crate::openapi::ArticleDoc]),
        (status = 500, description = "Database error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Article>>, JsonApiError> {
    let list = state.articles.list().await?;
    info!(count = list.len(), "list articles");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/articles/{id}", tag = "articles",
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ArticleDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Database error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Article>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.articles.get(id).await?))
}

#[utoipa::path(
    put, path = "/articles/{id}", tag = "articles",
    params(("id" = i32, Path, description = "Article id")),
    request_body = crate::openapi::ArticleInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Database error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ArticleInput>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    state.articles.update(id, &input).await?;
    Ok(Json(MessageResponse::new("Article updated successfully")))
}

#[utoipa::path(
    delete, path = "/articles/{id}", tag = "articles",
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Database error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Path(id) = id?;
    state.articles.delete(id).await?;
    Ok(Json(MessageResponse::new("Article deleted successfully")))
}
