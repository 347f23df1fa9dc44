//! Core storage traits.
//!
//! - [`BookStorage`] - CRUD operations and collection snapshots

mod storage;

pub use storage::{BookStorage, Snapshot};
