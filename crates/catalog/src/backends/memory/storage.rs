//! BookStorage implementation for the in-memory backend.

use async_trait::async_trait;

use crate::core::{BookStorage, Snapshot};
use crate::error::CatalogResult;
use crate::types::{Book, BookChanges, BookId, NewBook};

use super::MemoryBackend;

#[async_trait]
impl BookStorage for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> CatalogResult<Snapshot> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: BookId) -> CatalogResult<Option<Book>> {
        Ok(self.get(id))
    }

    async fn insert(&self, book: NewBook) -> CatalogResult<Book> {
        self.insert_book(book)
    }

    async fn update(&self, id: BookId, changes: BookChanges) -> CatalogResult<Book> {
        self.update_book(id, changes)
    }

    async fn delete(&self, id: BookId) -> CatalogResult<Book> {
        self.remove_book(id)
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(self.len() as u64)
    }
}
