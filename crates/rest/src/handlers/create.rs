//! Create handler.
//!
//! `POST /api/books`

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use libris_catalog::core::BookStorage;
use libris_catalog::types::NewBook;
use serde_json::json;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::JsonBody;
use crate::responses::success_envelope;
use crate::state::AppState;

/// Handler for adding a book.
///
/// The backend assigns the id. `title`, `author` and `category` are
/// required; the other fields take their defaults.
///
/// # Response
///
/// - `201 Created` - `{ success, message, book }` with a `Location` header
/// - `400 Bad Request` - Missing field or value out of range
/// - `409 Conflict` - Another book carries the same ISBN
///
/// # Example
///
/// ```http
/// POST /api/books HTTP/1.1
/// Content-Type: application/json
///
/// {"title": "Dune", "author": "Frank Herbert", "category": "fiction"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(new_book): JsonBody<NewBook>,
) -> RestResult<Response>
where
    S: BookStorage,
{
    debug!(title = ?new_book.title, "Processing create request");

    let book = state.storage().insert(new_book).await?;

    debug!(id = %book.id, "Book created");

    let location = format!("/api/books/{}", book.id);
    let body = success_envelope(Some("Book added successfully"), &json!({ "book": book }));
    let mut response = (StatusCode::CREATED, Json(body)).into_response();
    if let Ok(value) = HeaderValue::from_str(&location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    Ok(response)
}
