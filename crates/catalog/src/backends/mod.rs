//! Storage backend implementations.
//!
//! | Backend | Description |
//! |---------|-------------|
//! | Memory | Process-local collection with copy-on-write snapshots |
//!
//! # Example
//!
//! ```
//! use libris_catalog::backends::memory::MemoryBackend;
//!
//! // Empty catalog
//! let backend = MemoryBackend::new();
//!
//! // Or start from the sample books
//! let backend = MemoryBackend::with_sample_data().unwrap();
//! ```

pub mod memory;
