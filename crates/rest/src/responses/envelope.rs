//! Success envelopes.
//!
//! Every successful response carries `success: true`. Paged responses add
//! the page metadata of the query engine next to the items.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use libris_catalog::types::QueryResult;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Key under which a paged envelope lists its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsKey {
    /// `books`, used by the listing.
    Books,
    /// `results`, used by advanced search.
    Results,
}

impl ItemsKey {
    /// Returns the JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemsKey::Books => "books",
            ItemsKey::Results => "results",
        }
    }
}

/// Paged response built from a [`QueryResult`].
///
/// # Example
///
/// ```rust
/// use libris_rest::responses::{ItemsKey, PageEnvelope};
/// use libris_catalog::types::QueryResult;
///
/// let result = QueryResult {
///     books: Vec::new(),
///     total: 0,
///     page: 1,
///     page_size: 10,
///     total_pages: 0,
///     has_next_page: false,
///     has_prev_page: false,
/// };
/// let body = PageEnvelope::new(ItemsKey::Books, result).to_json();
/// assert_eq!(body["success"], true);
/// assert_eq!(body["totalPages"], 0);
/// ```
#[derive(Debug, Clone)]
pub struct PageEnvelope {
    key: ItemsKey,
    result: QueryResult,
}

impl PageEnvelope {
    /// Wraps a query result.
    pub fn new(key: ItemsKey, result: QueryResult) -> Self {
        Self { key, result }
    }

    /// Builds the JSON body.
    pub fn to_json(&self) -> Value {
        let result = &self.result;
        json!({
            "success": true,
            self.key.as_str(): result.books,
            "total": result.total,
            "page": result.page,
            "pageSize": result.page_size,
            "totalPages": result.total_pages,
            "hasNextPage": result.has_next_page,
            "hasPrevPage": result.has_prev_page,
        })
    }
}

impl IntoResponse for PageEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.to_json())).into_response()
    }
}

/// Builds `{ success: true, message?, <fields of data> }`.
///
/// `data` must serialize to a JSON object; its fields are merged into the
/// envelope. Anything else is placed under `data`.
pub fn success_envelope<T: Serialize>(message: Option<&str>, data: &T) -> Value {
    let mut body = Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    if let Some(message) = message {
        body.insert("message".to_string(), Value::String(message.to_string()));
    }
    match serde_json::to_value(data) {
        Ok(Value::Object(fields)) => body.extend(fields),
        Ok(Value::Null) => {}
        Ok(other) => {
            body.insert("data".to_string(), other);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize response data");
        }
    }
    Value::Object(body)
}
