//! Listing parameters extractor.
//!
//! Extracts the query string of `GET /api/books` and turns it into a
//! [`QueryRequest`].

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use libris_catalog::error::QueryError;
use libris_catalog::types::{QueryRequest, YearRange};

use super::pagination::{Pagination, parse_int_str};
use crate::error::{RestError, RestResult};

/// Axum extractor for book listing parameters.
///
/// Recognised keys: `category`, `search`, `categories` (comma-separated),
/// `minRating`, `year`, `yearStart`, `yearEnd`, `sortBy`, `sortOrder`,
/// `page`, `pageSize` (alias `limit`). Empty values count as absent; other
/// keys are ignored.
///
/// # Example
///
/// ```rust,ignore
/// use libris_rest::extractors::ListParams;
///
/// async fn list_handler(params: ListParams) {
///     let request = params.into_request(10, 100)?;
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ListParams {
    params: HashMap<String, String>,
}

impl ListParams {
    /// Creates listing params from a HashMap.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Returns a non-empty parameter value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Builds the engine request.
    ///
    /// # Errors
    ///
    /// Returns a bad request when a numeric parameter does not parse.
    pub fn into_request(
        &self,
        default_page_size: usize,
        max_page_size: usize,
    ) -> RestResult<QueryRequest> {
        let mut request = QueryRequest::new();

        request.category = self.get("category").map(String::from);
        request.search_term = self.get("search").map(String::from);

        if let Some(categories) = self.get("categories") {
            request.filters.categories = categories
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(min_rating) = self.get("minRating") {
            let value = min_rating.trim().parse::<f64>().map_err(|_| {
                RestError::from(QueryError::invalid(
                    "minRating",
                    format!("'{}' is not a number", min_rating),
                ))
            })?;
            request.filters.min_rating = Some(value);
        }

        request.filters.year = self.year("year")?;

        let range = YearRange {
            start: self.year("yearStart")?,
            end: self.year("yearEnd")?,
        };
        if !range.is_unbounded() {
            request.filters.year_range = Some(range);
        }

        request.sort_by = self.get("sortBy").map(String::from);
        request.sort_order = self.get("sortOrder").map(String::from);

        let pagination = Pagination::from_query_values(
            self.get("page"),
            self.get("pageSize").or_else(|| self.get("limit")),
            default_page_size,
            max_page_size,
        )?;

        Ok(pagination.apply(request))
    }

    fn year(&self, name: &str) -> RestResult<Option<i32>> {
        self.get(name)
            .map(|v| -> RestResult<i32> {
                let year = parse_int_str(name, v)?;
                i32::try_from(year)
                    .map_err(|_| QueryError::invalid(name, "year out of range").into())
            })
            .transpose()
    }
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::bad_request(format!("Invalid query string: {}", e)))?;
        Ok(Self::from_map(params))
    }
}
