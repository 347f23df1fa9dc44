//! Update handler.
//!
//! `PUT /api/books/{id}`

use axum::{
    Json,
    extract::{Path, State},
};
use libris_catalog::core::BookStorage;
use libris_catalog::types::BookChanges;
use serde_json::{Value, json};
use tracing::debug;

use super::parse_book_id;
use crate::error::{RestError, RestResult};
use crate::extractors::JsonBody;
use crate::responses::success_envelope;
use crate::state::AppState;

/// Handler for partially updating a book.
///
/// Only the fields present in the body change. `id` and `createdAt` are
/// never taken from the body.
///
/// # Response
///
/// - `200 OK` - `{ success, message, book }`
/// - `400 Bad Request` - Bad id, empty body or invalid value
/// - `404 Not Found` - No book has that id
/// - `409 Conflict` - The new ISBN belongs to another book
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<BookChanges>,
) -> RestResult<Json<Value>>
where
    S: BookStorage,
{
    let id = parse_book_id(&id)?;
    debug!(id = %id, "Processing update request");

    if changes.is_empty() {
        return Err(RestError::bad_request("No fields to update"));
    }

    let book = state.storage().update(id, changes).await?;

    Ok(Json(success_envelope(
        Some("Book updated successfully"),
        &json!({ "book": book }),
    )))
}
