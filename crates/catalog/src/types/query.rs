//! Query request and result types.
//!
//! A [`QueryRequest`] is the already-parsed input of the query engine. It
//! mirrors the wire shape closely: pagination values are kept signed and
//! sort parameters are kept as text, so that the engine is the single place
//! where they are validated.

use serde::{Deserialize, Serialize};

use super::book::Book;

/// Default page number.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Default sort field.
pub const DEFAULT_SORT_BY: &str = "id";

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Inclusive publication-year bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearRange {
    /// Creates a range with both bounds.
    pub fn between(start: i32, end: i32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a range open at the top.
    pub fn from(start: i32) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Creates a range open at the bottom.
    pub fn until(end: i32) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Returns true when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns true when `year` lies within the bounds.
    pub fn contains(&self, year: i32) -> bool {
        self.start.is_none_or(|start| year >= start) && self.end.is_none_or(|end| year <= end)
    }
}

/// Structured filters of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Allowed categories, matched case-insensitively. Empty means any.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Minimum rating, inclusive.
    pub min_rating: Option<f64>,
    /// Exact publication year.
    pub year: Option<i32>,
    /// Publication-year bounds.
    pub year_range: Option<YearRange>,
}

impl Filters {
    /// Returns true when any year constraint is present.
    pub fn has_year_constraint(&self) -> bool {
        self.year.is_some() || self.year_range.is_some_and(|r| !r.is_unbounded())
    }
}

/// Input to the query engine.
///
/// # Examples
///
/// ```
/// use libris_catalog::types::{QueryRequest, YearRange};
///
/// let request = QueryRequest::new()
///     .with_category("science")
///     .with_search_term("quantum")
///     .with_year_range(YearRange::from(2020))
///     .with_sort("rating", "desc")
///     .with_page(1, 5);
///
/// assert_eq!(request.page_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Exact category; `"all"` or empty means no filter.
    pub category: Option<String>,
    /// Free-text term over title, author and description.
    pub search_term: Option<String>,
    /// Structured filters.
    #[serde(default)]
    pub filters: Filters,
    /// Sort field name.
    pub sort_by: Option<String>,
    /// Sort direction (`asc` or `desc`).
    pub sort_order: Option<String>,
    /// 1-based page number.
    pub page: i64,
    /// Records per page.
    pub page_size: i64,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            category: None,
            search_term: None,
            filters: Filters::default(),
            sort_by: None,
            sort_order: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryRequest {
    /// Creates a request with default pagination and no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the free-text term.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Sets the category set filter.
    pub fn with_categories<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.filters.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the minimum rating.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.filters.min_rating = Some(min_rating);
        self
    }

    /// Sets the exact year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.filters.year = Some(year);
        self
    }

    /// Sets the year range.
    pub fn with_year_range(mut self, range: YearRange) -> Self {
        self.filters.year_range = Some(range);
        self
    }

    /// Sets sort field and direction.
    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_order: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(sort_order.into());
        self
    }

    /// Sets page and page size.
    pub fn with_page(mut self, page: i64, page_size: i64) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// One page of query output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Records on this page, in sorted order.
    pub books: Vec<Book>,
    /// Matching records before pagination.
    pub total: u64,
    /// The requested page.
    pub page: u64,
    /// The requested page size.
    pub page_size: u64,
    /// Number of pages (0 when nothing matched).
    pub total_pages: u64,
    /// Whether a later page holds records.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_prev_page: bool,
}

impl QueryResult {
    /// Returns the ids on this page, in order.
    pub fn ids(&self) -> Vec<super::BookId> {
        self.books.iter().map(|b| b.id).collect()
    }
}
