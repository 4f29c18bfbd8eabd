use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use bookshelf_http::error::AppError;

use super::models::{Book, CreateBook};
use super::service::CatalogService;

/// HTTP routes of the books module, relative to its mount point
pub fn router(service: CatalogService) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/upcoming", get(upcoming_books))
        .route("/health", get(health_check))
        .with_state(service)
}

async fn list_books(State(service): State<CatalogService>) -> Json<Vec<Book>> {
    Json(service.list_books())
}

async fn create_book(
    State(service): State<CatalogService>,
    payload: Result<Json<CreateBook>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let Json(input) = payload
        .map_err(|rejection| AppError::rejected(rejection.status(), rejection.body_text()))?;
    let book = service.create_book(input)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn upcoming_books(
    State(service): State<CatalogService>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(service.get_upcoming().await?))
}

async fn health_check() -> &'static str {
    "books module is healthy"
}
