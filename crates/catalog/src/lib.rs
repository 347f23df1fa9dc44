//! Libris Catalog
//!
//! This crate holds the book catalog domain of the Libris digital library:
//! record types, the query engine that filters, sorts and paginates a
//! collection, the storage abstraction with its in-memory backend, and the
//! account and discovery services used by the HTTP layer.
//!
//! # Architecture
//!
//! - [`types`] - Book records, query requests and results
//! - [`error`] - Error types for all operations
//! - [`query`] - The pure query engine
//! - [`core`] - Storage traits
//! - [`backends`] - Backend implementations
//! - [`discovery`] - Relevance search and summarisation
//! - [`accounts`] - User registration, login and sessions
//!
//! # Quick Start
//!
//! ```
//! use libris_catalog::query::execute;
//! use libris_catalog::types::{Book, BookId, QueryRequest};
//!
//! let books = vec![
//!     Book::new(BookId::new(1), "The AI Revolution", "Dr. Alan Turing", "science").with_rating(4.8),
//!     Book::new(BookId::new(2), "Digital Transformation", "Sarah Johnson", "technology").with_rating(4.5),
//!     Book::new(BookId::new(3), "The Quantum World", "Prof. Richard Feynman", "physics").with_rating(4.9),
//! ];
//!
//! let request = QueryRequest::new()
//!     .with_min_rating(4.6)
//!     .with_sort("rating", "desc")
//!     .with_page(1, 10);
//!
//! let result = execute(&books, &request).unwrap();
//! assert_eq!(result.total, 2);
//! assert_eq!(result.books[0].title, "The Quantum World");
//! assert!(!result.has_next_page);
//! ```
//!
//! # Storage
//!
//! ```
//! use libris_catalog::backends::memory::MemoryBackend;
//! use libris_catalog::core::BookStorage;
//! use libris_catalog::types::QueryRequest;
//!
//! # async fn example() -> libris_catalog::CatalogResult<()> {
//! let storage = MemoryBackend::with_sample_data()?;
//! let page = storage.search(&QueryRequest::new().with_category("technology")).await?;
//! assert_eq!(page.total, 2);
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod accounts;
pub mod backends;
pub mod core;
pub mod discovery;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use types::{Book, BookChanges, BookId, NewBook, QueryRequest, QueryResult};

// Re-export core traits
pub use crate::core::{BookStorage, Snapshot};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
