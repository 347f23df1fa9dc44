//! Listing handler.
//!
//! `GET /api/books`

use axum::extract::State;
use libris_catalog::core::BookStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ListParams;
use crate::responses::{ItemsKey, PageEnvelope};
use crate::state::AppState;

/// Handler for the book listing.
///
/// Runs the query engine with the parameters of the query string.
///
/// # Response
///
/// - `200 OK` - Paged envelope with the page under `books`
/// - `400 Bad Request` - A parameter is malformed or out of range
///
/// # Example
///
/// ```http
/// GET /api/books?category=science&sortBy=rating&sortOrder=desc&page=1 HTTP/1.1
/// ```
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<PageEnvelope>
where
    S: BookStorage,
{
    let request = params.into_request(state.default_page_size(), state.max_page_size())?;

    debug!(
        category = ?request.category,
        search = ?request.search_term,
        page = request.page,
        page_size = request.page_size,
        "Processing list request"
    );

    let result = state.storage().search(&request).await?;

    debug!(total = result.total, returned = result.books.len(), "List completed");

    Ok(PageEnvelope::new(ItemsKey::Books, result))
}
