//! Core book storage trait.
//!
//! This module defines the [`BookStorage`] trait, which provides the CRUD
//! operations for book records and hands out immutable snapshots of the
//! collection for the query engine to run over.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::query;
use crate::types::{Book, BookChanges, BookId, NewBook, QueryRequest, QueryResult};

/// An immutable view of the whole collection, in insertion order.
///
/// A snapshot is never changed by later writes; holders can run the query
/// engine over it without holding any lock.
pub type Snapshot = Arc<Vec<Book>>;

/// Core storage trait for book records.
///
/// # Uniqueness
///
/// Ids are assigned by the backend from a monotonically increasing counter
/// and are never reused. A non-empty ISBN must be unique across the
/// collection; empty ISBNs are not constrained.
///
/// # Example
///
/// ```ignore
/// use libris_catalog::core::BookStorage;
/// use libris_catalog::types::{NewBook, BookChanges, QueryRequest};
///
/// async fn example<S: BookStorage>(storage: &S) -> CatalogResult<()> {
///     let book = storage
///         .insert(NewBook::new("The Quantum World", "Prof. Richard Feynman", "physics"))
///         .await?;
///
///     let changes = BookChanges { rating: Some(4.5), ..Default::default() };
///     let updated = storage.update(book.id, changes).await?;
///     assert_eq!(updated.created_at, book.created_at);
///
///     let page = storage.search(&QueryRequest::new().with_category("physics")).await?;
///     assert_eq!(page.total, 1);
///
///     storage.delete(book.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait BookStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns a snapshot of the collection.
    async fn list(&self) -> CatalogResult<Snapshot>;

    /// Looks up a single book.
    ///
    /// Returns `Ok(None)` when no book has the given id.
    async fn find_by_id(&self, id: BookId) -> CatalogResult<Option<Book>>;

    /// Validates and stores a new book.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - required field missing or a value out of range
    /// * `BookError::DuplicateIsbn` - another book carries the same ISBN
    async fn insert(&self, book: NewBook) -> CatalogResult<Book>;

    /// Applies a partial update.
    ///
    /// The id and creation time never change; `updatedAt` is refreshed.
    ///
    /// # Errors
    ///
    /// * `BookError::NotFound` - no book has the given id
    /// * `ValidationError` - the updated record is invalid
    /// * `BookError::DuplicateIsbn` - the new ISBN belongs to another book
    async fn update(&self, id: BookId, changes: BookChanges) -> CatalogResult<Book>;

    /// Removes a book and returns it.
    ///
    /// # Errors
    ///
    /// * `BookError::NotFound` - no book has the given id
    async fn delete(&self, id: BookId) -> CatalogResult<Book>;

    /// Returns the number of stored books.
    async fn count(&self) -> CatalogResult<u64>;

    /// Runs the query engine over a fresh snapshot.
    async fn search(&self, request: &QueryRequest) -> CatalogResult<QueryResult> {
        let snapshot = self.list().await?;
        Ok(query::execute(&snapshot, request)?)
    }
}
