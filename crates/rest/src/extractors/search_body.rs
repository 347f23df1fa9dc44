//! Request bodies of the search endpoints.

use libris_catalog::error::QueryError;
use libris_catalog::types::{QueryRequest, YearRange};
use serde::Deserialize;
use serde_json::Value;

use super::pagination::{Pagination, parse_int_value};
use crate::error::{RestError, RestResult};

/// Structured filters shared by the search bodies.
///
/// `year` and the range bounds accept integers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Categories a book must belong to (any of).
    #[serde(default)]
    pub categories: Vec<String>,
    /// Single category, merged with the top-level `category`.
    pub category: Option<String>,
    /// Minimum rating, inclusive.
    pub min_rating: Option<f64>,
    /// Exact publication year.
    pub year: Option<Value>,
    /// Inclusive publication year range.
    pub year_range: Option<RawYearRange>,
}

/// Year range as sent on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawYearRange {
    /// First year, inclusive.
    pub start: Option<Value>,
    /// Last year, inclusive.
    pub end: Option<Value>,
}

impl SearchFilters {
    /// Copies the filters into `request`.
    ///
    /// `filters.category` only applies when the request has no top-level
    /// category.
    fn apply(self, mut request: QueryRequest) -> RestResult<QueryRequest> {
        if request.category.is_none() {
            request.category = self.category;
        }
        request.filters.categories = self.categories;
        request.filters.min_rating = self.min_rating;
        request.filters.year = year_value("year", self.year.as_ref())?;
        if let Some(range) = self.year_range {
            let range = YearRange {
                start: year_value("yearRange.start", range.start.as_ref())?,
                end: year_value("yearRange.end", range.end.as_ref())?,
            };
            if !range.is_unbounded() {
                request.filters.year_range = Some(range);
            }
        }
        Ok(request)
    }
}

/// Body of `POST /api/books/search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    /// Free-text query.
    pub query: Option<String>,
    /// Category name, or `all`.
    pub category: Option<String>,
    /// Structured filters.
    #[serde(default)]
    pub filters: SearchFilters,
    /// Sort field name.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    /// 1-based page number.
    pub page: Option<Value>,
    /// Page size.
    #[serde(alias = "limit")]
    pub page_size: Option<Value>,
}

impl SearchBody {
    /// Builds the engine request.
    ///
    /// # Errors
    ///
    /// Returns a bad request when a page or year value is not an integer.
    pub fn into_request(
        self,
        default_page_size: usize,
        max_page_size: usize,
    ) -> RestResult<QueryRequest> {
        let pagination = Pagination::from_json_values(
            self.page.as_ref(),
            self.page_size.as_ref(),
            default_page_size,
            max_page_size,
        )?;

        let mut request = QueryRequest::new();
        request.category = self.category.filter(|c| !c.trim().is_empty());
        request.search_term = self.query;
        request.sort_by = self.sort_by;
        request.sort_order = self.sort_order;

        let request = self.filters.apply(request)?;
        Ok(pagination.apply(request))
    }
}

/// Body of `POST /api/search/ai`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiSearchBody {
    /// Natural-language query.
    pub query: Option<String>,
    /// Category name, or `all`.
    pub category: Option<String>,
    /// Structured filters.
    #[serde(default)]
    pub filters: SearchFilters,
}

impl AiSearchBody {
    /// Splits the body into the query text and the filter scope.
    ///
    /// # Errors
    ///
    /// Returns a bad request when the query is missing or blank.
    pub fn into_parts(self) -> RestResult<(String, QueryRequest)> {
        let query = self
            .query
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| RestError::bad_request("Search query is required"))?;

        let mut scope = QueryRequest::new();
        scope.category = self.category.filter(|c| !c.trim().is_empty());
        let scope = self.filters.apply(scope)?;
        Ok((query, scope))
    }
}

/// Body of `POST /api/search/summarize`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeBody {
    /// Text to summarize.
    pub content: Option<String>,
    /// Summary length limit in characters.
    pub max_length: Option<Value>,
}

impl SummarizeBody {
    /// Returns the content and the length limit.
    ///
    /// # Errors
    ///
    /// Returns a bad request when `maxLength` is not a non-negative integer.
    pub fn into_parts(self, default_max_length: usize) -> RestResult<(String, usize)> {
        let max_length = match parse_int_value("maxLength", self.max_length.as_ref())? {
            None => default_max_length,
            Some(n) => usize::try_from(n).map_err(|_| {
                RestError::from(QueryError::invalid("maxLength", "must not be negative"))
            })?,
        };
        Ok((self.content.unwrap_or_default(), max_length))
    }
}

fn year_value(parameter: &str, value: Option<&Value>) -> RestResult<Option<i32>> {
    match parse_int_value(parameter, value)? {
        None => Ok(None),
        Some(year) => i32::try_from(year)
            .map(Some)
            .map_err(|_| QueryError::invalid(parameter, "year out of range").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_body_full() {
        let body: SearchBody = serde_json::from_value(json!({
            "query": "quantum",
            "category": "physics",
            "filters": {
                "categories": ["physics", "science"],
                "minRating": 4.5,
                "year": "2023",
                "yearRange": { "start": 2020, "end": "2024" }
            },
            "sortBy": "rating",
            "sortOrder": "desc",
            "page": "2",
            "pageSize": 5
        }))
        .unwrap();

        let request = body.into_request(10, 100).unwrap();
        assert_eq!(request.search_term.as_deref(), Some("quantum"));
        assert_eq!(request.category.as_deref(), Some("physics"));
        assert_eq!(request.filters.categories.len(), 2);
        assert_eq!(request.filters.year, Some(2023));
        assert_eq!(request.filters.year_range, Some(YearRange::between(2020, 2024)));
        assert_eq!(request.page, 2);
        assert_eq!(request.page_size, 5);
    }

    #[test]
    fn test_search_body_empty() {
        let body: SearchBody = serde_json::from_value(json!({})).unwrap();
        let request = body.into_request(10, 100).unwrap();
        assert_eq!(request, QueryRequest::new());
    }

    #[test]
    fn test_filters_category_fallback() {
        let body: SearchBody =
            serde_json::from_value(json!({ "filters": { "category": "history" } })).unwrap();
        let request = body.into_request(10, 100).unwrap();
        assert_eq!(request.category.as_deref(), Some("history"));
    }

    #[test]
    fn test_search_body_bad_page() {
        let body: SearchBody = serde_json::from_value(json!({ "pageSize": "lots" })).unwrap();
        assert!(body.into_request(10, 100).is_err());
    }

    #[test]
    fn test_ai_body_requires_query() {
        let body: AiSearchBody = serde_json::from_value(json!({ "query": "  " })).unwrap();
        assert!(body.into_parts().is_err());

        let body: AiSearchBody = serde_json::from_value(json!({
            "query": "machine learning",
            "filters": { "minRating": 4.0 }
        }))
        .unwrap();
        let (query, scope) = body.into_parts().unwrap();
        assert_eq!(query, "machine learning");
        assert_eq!(scope.filters.min_rating, Some(4.0));
    }

    #[test]
    fn test_summarize_body() {
        let body: SummarizeBody = serde_json::from_value(json!({ "content": "text" })).unwrap();
        assert_eq!(body.into_parts(200).unwrap(), ("text".to_string(), 200));

        let body: SummarizeBody =
            serde_json::from_value(json!({ "content": "text", "maxLength": -5 })).unwrap();
        assert!(body.into_parts(200).is_err());
    }
}
