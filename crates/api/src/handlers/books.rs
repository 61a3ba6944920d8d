//! Handlers for the `/books` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use cordel_core::catalog::BookPayload;
use cordel_core::types::DbId;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /books
///
/// List all books.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = state.catalog.list_all().await?;
    Ok(Json(books))
}

/// GET /books/{id}
///
/// Get a single book by id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let book = state.catalog.get_by_id(id).await?;
    Ok(Json(book))
}

/// POST /books
///
/// Create a new book. Responds 201 with the persisted object and a
/// `Location: /books/{id}` header.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<impl IntoResponse> {
    let book = state.catalog.create(payload).await?;
    let location = format!("/books/{}", book.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(book),
    ))
}

/// PUT /books/{id}
///
/// Overwrite all mutable fields of an existing book.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<BookPayload>,
) -> AppResult<impl IntoResponse> {
    let book = state.catalog.update(id, payload).await?;
    Ok(Json(book))
}

/// DELETE /books/{id}
///
/// Permanently remove a book. Responds 204 with an empty body.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
