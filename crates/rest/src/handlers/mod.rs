//! HTTP request handlers.
//!
//! - [`list`] - List books through the query engine
//! - [`read`] - Read a book by id
//! - [`create`] - Add a book
//! - [`update`] - Partially update a book
//! - [`delete`] - Remove a book
//! - [`search`] - Advanced search with a JSON body
//! - [`discovery`] - Relevance search and summarisation
//! - [`auth`] - Registration, login and current user
//! - [`health`] - Health check endpoint

pub mod auth;
pub mod create;
pub mod delete;
pub mod discovery;
pub mod health;
pub mod list;
pub mod read;
pub mod search;
pub mod update;

pub use auth::{login_handler, me_handler, register_handler};
pub use create::create_handler;
pub use delete::delete_handler;
pub use discovery::{ai_search_handler, summarize_handler};
pub use health::health_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use search::search_handler;
pub use update::update_handler;

use libris_catalog::types::BookId;

use crate::error::{RestError, RestResult};

/// Parses the `{id}` path segment.
pub(crate) fn parse_book_id(raw: &str) -> RestResult<BookId> {
    raw.parse::<BookId>()
        .map_err(|_| RestError::bad_request(format!("Invalid book id: {}", raw)))
}
