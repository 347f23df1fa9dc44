//! Read handler.
//!
//! `GET /api/books/{id}`

use axum::{
    Json,
    extract::{Path, State},
};
use libris_catalog::core::BookStorage;
use libris_catalog::error::BookError;
use serde_json::{Value, json};
use tracing::debug;

use super::parse_book_id;
use crate::error::RestResult;
use crate::state::AppState;

/// Handler for reading one book.
///
/// # Response
///
/// - `200 OK` - `{ success, book }`
/// - `400 Bad Request` - The id is not a number
/// - `404 Not Found` - No book has that id
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<Value>>
where
    S: BookStorage,
{
    let id = parse_book_id(&id)?;
    debug!(id = %id, "Processing read request");

    let book = state
        .storage()
        .find_by_id(id)
        .await?
        .ok_or(BookError::NotFound { id })?;

    Ok(Json(json!({ "success": true, "book": book })))
}
