//! Response formatting for the REST API.
//!
//! - [`envelope`] - Success envelopes, paged and plain

pub mod envelope;

pub use envelope::{ItemsKey, PageEnvelope, success_envelope};
