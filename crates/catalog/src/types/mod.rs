//! Core types for the catalog.
//!
//! - [`Book`], [`NewBook`], [`BookChanges`] - book records and their payloads
//! - [`QueryRequest`], [`Filters`], [`YearRange`] - query engine input
//! - [`QueryResult`] - one page of query output
//!
//! # Examples
//!
//! ```
//! use libris_catalog::types::{NewBook, BookId};
//! use chrono::Utc;
//!
//! let book = NewBook::new("The Quantum World", "Prof. Richard Feynman", "physics")
//!     .into_book(BookId::new(1), Utc::now())
//!     .unwrap();
//!
//! assert_eq!(book.language, "English");
//! ```

mod book;
mod query;

pub use book::{
    Book, BookChanges, BookId, DEFAULT_LANGUAGE, MAX_RATING, MIN_YEAR, NewBook, max_year,
    normalize_isbn,
};
pub use query::{
    ALL_CATEGORIES, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY, Filters, QueryRequest,
    QueryResult, YearRange,
};
