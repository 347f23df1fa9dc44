//! In-memory backend.
//!
//! Holds the collection in process memory and hands out immutable
//! snapshots. Optionally seeded with a small sample catalog.

mod backend;
mod seed;
mod storage;

pub use backend::MemoryBackend;
pub use seed::sample_books;
