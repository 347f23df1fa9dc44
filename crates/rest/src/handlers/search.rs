//! Advanced search handler.
//!
//! `POST /api/books/search`

use axum::extract::State;
use libris_catalog::core::BookStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{JsonBody, SearchBody};
use crate::responses::{ItemsKey, PageEnvelope};
use crate::state::AppState;

/// Handler for advanced search.
///
/// Same engine as the listing, driven by a JSON body. An empty object is a
/// valid request for the first page of the whole collection.
///
/// # Response
///
/// - `200 OK` - Paged envelope with the page under `results`
/// - `400 Bad Request` - Malformed body or invalid argument
///
/// # Example
///
/// ```http
/// POST /api/books/search HTTP/1.1
/// Content-Type: application/json
///
/// {"query": "quantum", "filters": {"minRating": 4.5}, "sortBy": "year"}
/// ```
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody<SearchBody>,
) -> RestResult<PageEnvelope>
where
    S: BookStorage,
{
    let request = body.into_request(state.default_page_size(), state.max_page_size())?;

    debug!(
        query = ?request.search_term,
        sort_by = ?request.sort_by,
        page = request.page,
        "Processing search request"
    );

    let result = state.storage().search(&request).await?;

    debug!(total = result.total, "Search completed");

    Ok(PageEnvelope::new(ItemsKey::Results, result))
}
