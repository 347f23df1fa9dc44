//! Health check endpoint handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use libris_catalog::core::BookStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Reports the backend name and the number of stored books, which also
/// proves the storage answers.
///
/// # Response
///
/// - `200 OK` - Server is healthy
/// - `500 Internal Server Error` - Storage failed to answer
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: BookStorage,
{
    debug!("Processing health check request");

    let books = state.storage().count().await?;

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.storage().backend_name(),
        "books": books,
        "version": crate::VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}
