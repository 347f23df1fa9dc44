//! Axum extractors for catalog requests.
//!
//! - [`JsonBody`] - JSON bodies with envelope-shaped rejections
//! - [`ListParams`] - Query string of the book listing
//! - [`SearchBody`], [`AiSearchBody`], [`SummarizeBody`] - Search bodies
//! - [`Pagination`] - Page and page size resolution
//! - [`BearerToken`] - Session token from the `Authorization` header

mod auth;
mod json_body;
mod list_params;
mod pagination;
mod search_body;

pub use auth::BearerToken;
pub use json_body::JsonBody;
pub use list_params::ListParams;
pub use pagination::Pagination;
pub use search_body::{AiSearchBody, RawYearRange, SearchBody, SearchFilters, SummarizeBody};
