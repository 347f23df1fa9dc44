//! In-memory backend implementation.

use std::fmt::Debug;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{BackendError, BookError, CatalogResult};
use crate::types::{Book, BookChanges, BookId, NewBook};

use super::seed;

/// In-memory backend for book storage.
///
/// The collection lives behind a single `RwLock<Arc<Vec<Book>>>`. Readers
/// clone the `Arc` and release the lock at once; writers copy the vector
/// when a snapshot is still shared, modify the copy and swap it in. A
/// snapshot handed to a reader therefore never changes.
pub struct MemoryBackend {
    state: RwLock<State>,
}

struct State {
    books: Arc<Vec<Book>>,
    /// Highest id ever assigned, 0 when none.
    last_id: u64,
}

impl Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("MemoryBackend")
            .field("books", &state.books.len())
            .field("last_id", &state.last_id)
            .finish()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                books: Arc::new(Vec::new()),
                last_id: 0,
            }),
        }
    }

    /// Creates a backend holding the eight sample books, ids 1 to 8.
    pub fn with_sample_data() -> CatalogResult<Self> {
        let backend = Self::new();
        for book in seed::sample_books() {
            backend.insert_book(book)?;
        }
        Ok(backend)
    }

    /// Creates a backend from existing records, keeping their ids.
    ///
    /// New ids continue after the highest existing one. A record may carry
    /// `u64::MAX`; later inserts then fail.
    ///
    /// # Errors
    ///
    /// Fails when a record is invalid, or when two records share an id or a
    /// non-empty ISBN.
    pub fn from_books(books: Vec<Book>) -> CatalogResult<Self> {
        let mut accepted: Vec<Book> = Vec::with_capacity(books.len());
        for book in books {
            book.validate()?;
            if accepted.iter().any(|b| b.id == book.id) {
                return Err(BookError::AlreadyExists { id: book.id }.into());
            }
            ensure_unique_isbn(&accepted, &book, None)?;
            accepted.push(book);
        }

        let last_id = accepted.iter().map(|b| b.id.value()).max().unwrap_or(0);
        Ok(Self {
            state: RwLock::new(State {
                books: Arc::new(accepted),
                last_id,
            }),
        })
    }

    pub(crate) fn snapshot(&self) -> Arc<Vec<Book>> {
        Arc::clone(&self.state.read().books)
    }

    pub(crate) fn get(&self, id: BookId) -> Option<Book> {
        self.snapshot().iter().find(|b| b.id == id).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.state.read().books.len()
    }

    pub(crate) fn insert_book(&self, new_book: NewBook) -> CatalogResult<Book> {
        let mut state = self.state.write();
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| BackendError::Internal {
                backend_name: "memory".to_string(),
                message: "book id space exhausted".to_string(),
                source: None,
            })?;
        let book = new_book.into_book(BookId::new(next), Utc::now())?;
        ensure_unique_isbn(&state.books, &book, None)?;

        Arc::make_mut(&mut state.books).push(book.clone());
        state.last_id = next;

        debug!(id = %book.id, title = %book.title, "Book created");
        Ok(book)
    }

    pub(crate) fn update_book(&self, id: BookId, changes: BookChanges) -> CatalogResult<Book> {
        let mut state = self.state.write();
        let position = state
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(BookError::NotFound { id })?;

        let updated = changes.apply(&state.books[position], Utc::now())?;
        ensure_unique_isbn(&state.books, &updated, Some(id))?;

        Arc::make_mut(&mut state.books)[position] = updated.clone();

        debug!(id = %id, "Book updated");
        Ok(updated)
    }

    pub(crate) fn remove_book(&self, id: BookId) -> CatalogResult<Book> {
        let mut state = self.state.write();
        let position = state
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(BookError::NotFound { id })?;

        let removed = Arc::make_mut(&mut state.books).remove(position);

        debug!(id = %id, "Book deleted");
        Ok(removed)
    }
}

fn ensure_unique_isbn(books: &[Book], book: &Book, ignore: Option<BookId>) -> CatalogResult<()> {
    let Some(key) = book.isbn_key() else {
        return Ok(());
    };
    let taken = books
        .iter()
        .filter(|b| Some(b.id) != ignore)
        .any(|b| b.isbn_key().as_deref() == Some(key.as_str()));
    if taken {
        return Err(BookError::DuplicateIsbn {
            isbn: book.isbn.clone(),
        }
        .into());
    }
    Ok(())
}
