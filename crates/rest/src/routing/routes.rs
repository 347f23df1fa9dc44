//! Route configuration.
//!
//! Defines all routes of the catalog API.

use axum::{
    Router,
    routing::{get, post},
};
use libris_catalog::core::BookStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all REST API routes.
///
/// # Routes
///
/// ## Books
/// - `GET /api/books` - List
/// - `POST /api/books` - Create
/// - `POST /api/books/search` - Advanced search
/// - `GET /api/books/{id}` - Read
/// - `PUT /api/books/{id}` - Update
/// - `DELETE /api/books/{id}` - Delete
///
/// ## Discovery
/// - `POST /api/search/ai` - Relevance search
/// - `POST /api/search/summarize` - Summarisation
///
/// ## Accounts
/// - `POST /api/auth/register`
/// - `POST /api/auth/login`
/// - `GET /api/auth/me`
///
/// ## System
/// - `GET /health` - Health check
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: BookStorage + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        // Books
        .route(
            "/api/books",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route("/api/books/search", post(handlers::search_handler::<S>))
        .route(
            "/api/books/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        // Discovery
        .route("/api/search/ai", post(handlers::ai_search_handler::<S>))
        .route("/api/search/summarize", post(handlers::summarize_handler))
        // Accounts
        .route("/api/auth/register", post(handlers::register_handler::<S>))
        .route("/api/auth/login", post(handlers::login_handler::<S>))
        .route("/api/auth/me", get(handlers::me_handler::<S>))
        .with_state(state)
}
