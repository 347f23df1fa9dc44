//! The book query engine.
//!
//! [`execute`] runs the full pipeline over a collection:
//!
//! 1. category filter (`category` and `filters.categories`, intersected)
//! 2. free-text filter over title, author and description
//! 3. rating and year filters
//! 4. stable sort
//! 5. count and paginate
//!
//! The engine performs no I/O and never mutates its input. Stages 1 to 3 are
//! also available on their own through [`Criteria`].

use tracing::trace;

use super::sort::{SortField, SortOrder, sort_books};
use crate::error::QueryError;
use crate::types::{ALL_CATEGORIES, Book, DEFAULT_SORT_BY, QueryRequest, QueryResult, YearRange};

/// Validated filter criteria of a request (pipeline stages 1 to 3).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    category: Option<String>,
    categories: Vec<String>,
    search_term: Option<String>,
    min_rating: Option<f64>,
    year: Option<i32>,
    year_range: Option<YearRange>,
}

impl Criteria {
    /// Builds criteria from a request.
    ///
    /// Category values and the search term are lower-cased once here. The
    /// `"all"` sentinel and blank values are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] when `minRating` is not finite.
    pub fn from_request(request: &QueryRequest) -> Result<Self, QueryError> {
        let category = request
            .category
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);

        let categories = request
            .filters
            .categories
            .iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();

        let search_term = request
            .search_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        if let Some(min_rating) = request.filters.min_rating {
            if !min_rating.is_finite() {
                return Err(QueryError::invalid("minRating", "must be a finite number"));
            }
        }

        let filters = &request.filters;
        let (year, year_range) = if filters.has_year_constraint() {
            (filters.year, filters.year_range.filter(|r| !r.is_unbounded()))
        } else {
            (None, None)
        };

        Ok(Self {
            category,
            categories,
            search_term,
            min_rating: filters.min_rating,
            year,
            year_range,
        })
    }

    /// Stage 1: category equality and category set membership.
    pub fn matches_category(&self, book: &Book) -> bool {
        if self.category.is_none() && self.categories.is_empty() {
            return true;
        }
        let category = book.category.to_lowercase();
        self.category.as_ref().is_none_or(|c| *c == category)
            && (self.categories.is_empty() || self.categories.contains(&category))
    }

    /// Stage 2: free-text substring match over title, author and description.
    pub fn matches_text(&self, book: &Book) -> bool {
        let Some(term) = &self.search_term else {
            return true;
        };
        book.title.to_lowercase().contains(term.as_str())
            || book.author.to_lowercase().contains(term.as_str())
            || book.description.to_lowercase().contains(term.as_str())
    }

    /// Stage 3: minimum rating, exact year and year range.
    ///
    /// A record without a year fails whenever a year constraint is present.
    pub fn matches_ranges(&self, book: &Book) -> bool {
        if let Some(min_rating) = self.min_rating {
            if book.rating < min_rating {
                return false;
            }
        }
        if self.year.is_none() && self.year_range.is_none() {
            return true;
        }
        let Some(year) = book.year else {
            return false;
        };
        self.year.is_none_or(|y| y == year) && self.year_range.is_none_or(|r| r.contains(year))
    }

    /// All three filter stages.
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_category(book) && self.matches_text(book) && self.matches_ranges(book)
    }

    /// Applies stages 1 to 3, preserving input order.
    pub fn filter<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Validated page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
}

impl PageWindow {
    /// Validates raw page values.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] when `page_size < 1` or `page < 1`.
    pub fn new(page: i64, page_size: i64) -> Result<Self, QueryError> {
        if page_size < 1 {
            return Err(QueryError::invalid("pageSize", "must be a positive integer"));
        }
        if page < 1 {
            return Err(QueryError::invalid("page", "must be at least 1"));
        }
        Ok(Self {
            page: page as u64,
            page_size: page_size as u64,
        })
    }

    /// Index of the first record on the page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages for `total` records.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }

    /// Whether records exist past this page.
    pub fn has_next(&self, total: u64) -> bool {
        self.page.saturating_mul(self.page_size) < total
    }

    /// Whether this page has predecessors.
    pub fn has_prev(&self) -> bool {
        self.offset() > 0
    }

    /// Slices `items` to this page; out-of-range pages yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(self.page.saturating_mul(self.page_size))
            .unwrap_or(usize::MAX)
            .min(len);
        &items[start..end]
    }
}

/// Runs the full query pipeline over `books`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for a non-positive page size, a
/// page below 1, an unknown sort field or a non-finite minimum rating.
///
/// # Examples
///
/// ```
/// use libris_catalog::query::execute;
/// use libris_catalog::types::{Book, BookId, QueryRequest};
///
/// let books = vec![
///     Book::new(BookId::new(1), "Digital Transformation", "Sarah Johnson", "technology"),
///     Book::new(BookId::new(2), "The Quantum World", "Richard Feynman", "physics"),
/// ];
///
/// let result = execute(&books, &QueryRequest::new().with_search_term("DIGITAL")).unwrap();
/// assert_eq!(result.total, 1);
/// assert_eq!(result.books[0].id, BookId::new(1));
/// ```
pub fn execute(books: &[Book], request: &QueryRequest) -> Result<QueryResult, QueryError> {
    let window = PageWindow::new(request.page, request.page_size)?;
    let field = SortField::parse(request.sort_by.as_deref().unwrap_or(DEFAULT_SORT_BY))?;
    let order = request
        .sort_order
        .as_deref()
        .map(SortOrder::parse)
        .unwrap_or_default();
    let criteria = Criteria::from_request(request)?;

    let mut matched = criteria.filter(books);
    sort_books(&mut matched, field, order);

    let total = matched.len() as u64;
    let page: Vec<Book> = window.slice(&matched).iter().map(|b| (*b).clone()).collect();

    trace!(
        total,
        returned = page.len(),
        sort_by = %field,
        page = window.page,
        "Query executed"
    );

    Ok(QueryResult {
        books: page,
        total,
        page: window.page,
        page_size: window.page_size,
        total_pages: window.total_pages(total),
        has_next_page: window.has_next(total),
        has_prev_page: window.has_prev(),
    })
}
