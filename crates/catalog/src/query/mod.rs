//! Filtering, sorting and pagination over book collections.

mod engine;
mod sort;

pub use engine::{Criteria, PageWindow, execute};
pub use sort::{SortField, SortOrder, sort_books};
