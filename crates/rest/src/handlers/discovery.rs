//! Discovery handlers.
//!
//! - `POST /api/search/ai` - relevance-scored search
//! - `POST /api/search/summarize` - text summarisation

use axum::{Json, extract::State};
use libris_catalog::core::BookStorage;
use libris_catalog::discovery::{self, DEFAULT_MAX_LENGTH};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{AiSearchBody, JsonBody, SummarizeBody};
use crate::responses::success_envelope;
use crate::state::AppState;

/// Handler for relevance search.
///
/// Scores every book matching the optional filters against the query and
/// returns the matches best first, with the concepts and related topics
/// found in the query.
///
/// # Response
///
/// - `200 OK` - `{ success, query, results, aiInsights }`
/// - `400 Bad Request` - Missing query or invalid filter
pub async fn ai_search_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody<AiSearchBody>,
) -> RestResult<Json<Value>>
where
    S: BookStorage,
{
    let (query, scope) = body.into_parts()?;
    debug!(query = %query, "Processing AI search request");

    let snapshot = state.storage().list().await?;
    let outcome = discovery::ai_search(&snapshot, &query, &scope)?;

    debug!(
        matches = outcome.results.len(),
        confidence = outcome.insights.confidence,
        "AI search completed"
    );

    Ok(Json(json!({
        "success": true,
        "query": outcome.query,
        "results": outcome.results,
        "aiInsights": outcome.insights,
    })))
}

/// Handler for summarisation.
///
/// # Response
///
/// - `200 OK` - `{ success, originalLength, summaryLength, summary }`
/// - `400 Bad Request` - Missing content or `maxLength` below 4
pub async fn summarize_handler(
    JsonBody(body): JsonBody<SummarizeBody>,
) -> RestResult<Json<Value>> {
    let (content, max_length) = body.into_parts(DEFAULT_MAX_LENGTH)?;
    debug!(length = content.len(), max_length, "Processing summarize request");

    let summary = discovery::summarize(&content, max_length)?;

    Ok(Json(success_envelope(None, &summary)))
}
