//! Delete handler.
//!
//! `DELETE /api/books/{id}`

use axum::{
    Json,
    extract::{Path, State},
};
use libris_catalog::core::BookStorage;
use serde_json::{Value, json};
use tracing::debug;

use super::parse_book_id;
use crate::error::RestResult;
use crate::responses::success_envelope;
use crate::state::AppState;

/// Handler for removing a book.
///
/// # Response
///
/// - `200 OK` - `{ success, message, book }` with the removed record
/// - `400 Bad Request` - The id is not a number
/// - `404 Not Found` - No book has that id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<Value>>
where
    S: BookStorage,
{
    let id = parse_book_id(&id)?;
    debug!(id = %id, "Processing delete request");

    let book = state.storage().delete(id).await?;

    debug!(id = %id, "Book deleted");

    Ok(Json(success_envelope(
        Some("Book deleted successfully"),
        &json!({ "book": book }),
    )))
}
