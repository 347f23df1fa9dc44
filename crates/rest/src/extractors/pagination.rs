//! Pagination parameters.
//!
//! Resolves `page` and `pageSize` from query strings or JSON bodies, applying
//! the configured default and maximum page size. Range checks (`page >= 1`,
//! `pageSize >= 1`) are left to the query engine.

use libris_catalog::error::QueryError;
use libris_catalog::types::{DEFAULT_PAGE, QueryRequest};
use serde_json::Value;

use crate::error::RestResult;

/// Resolved page and page size.
///
/// # Example
///
/// ```rust
/// use libris_rest::extractors::Pagination;
///
/// let pagination = Pagination::from_query_values(Some("2"), Some("500"), 10, 100).unwrap();
/// assert_eq!(pagination.page(), 2);
/// assert_eq!(pagination.page_size(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    page_size: i64,
}

impl Pagination {
    /// Creates pagination from already-parsed values.
    ///
    /// Missing values take the defaults; a page size above `max_page_size`
    /// is capped to it.
    pub fn resolve(
        page: Option<i64>,
        page_size: Option<i64>,
        default_page_size: usize,
        max_page_size: usize,
    ) -> Self {
        let max = i64::try_from(max_page_size).unwrap_or(i64::MAX);
        let default = i64::try_from(default_page_size).unwrap_or(max);
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            page_size: page_size.unwrap_or(default).min(max),
        }
    }

    /// Parses query-string values.
    ///
    /// # Errors
    ///
    /// Returns a bad request when a value is not an integer.
    pub fn from_query_values(
        page: Option<&str>,
        page_size: Option<&str>,
        default_page_size: usize,
        max_page_size: usize,
    ) -> RestResult<Self> {
        let page = page.map(|v| parse_int_str("page", v)).transpose()?;
        let page_size = page_size.map(|v| parse_int_str("pageSize", v)).transpose()?;
        Ok(Self::resolve(page, page_size, default_page_size, max_page_size))
    }

    /// Parses JSON body values, accepting integers and numeric strings.
    ///
    /// `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns a bad request for any other JSON value.
    pub fn from_json_values(
        page: Option<&Value>,
        page_size: Option<&Value>,
        default_page_size: usize,
        max_page_size: usize,
    ) -> RestResult<Self> {
        let page = parse_int_value("page", page)?;
        let page_size = parse_int_value("pageSize", page_size)?;
        Ok(Self::resolve(page, page_size, default_page_size, max_page_size))
    }

    /// Returns the page number.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Writes the values into a query request.
    pub fn apply(&self, request: QueryRequest) -> QueryRequest {
        request.with_page(self.page, self.page_size)
    }
}

pub(crate) fn parse_int_str(parameter: &str, value: &str) -> RestResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| QueryError::invalid(parameter, format!("'{}' is not an integer", value)).into())
}

pub(crate) fn parse_int_value(parameter: &str, value: Option<&Value>) -> RestResult<Option<i64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => parse_int_str(parameter, s).map(Some),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Ok(Some(i)),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
                _ => Err(QueryError::invalid(parameter, format!("{} is not an integer", n)).into()),
            },
        },
        Some(other) => Err(QueryError::invalid(
            parameter,
            format!("expected an integer, got {}", other),
        )
        .into()),
    }
}
