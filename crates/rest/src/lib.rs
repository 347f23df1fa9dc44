//! # libris-rest - REST API for the Libris digital library
//!
//! This crate exposes the book catalog of [`libris_catalog`] over HTTP:
//! listing and advanced search through the query engine, book CRUD,
//! relevance search, summarisation and user accounts.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use libris_rest::{create_app_with_config, ServerConfig};
//! use libris_catalog::backends::memory::MemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = MemoryBackend::with_sample_data()?;
//!     let config = ServerConfig::default();
//!
//!     let app = create_app_with_config(backend, config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | list | GET | `/api/books` |
//! | create | POST | `/api/books` |
//! | read | GET | `/api/books/{id}` |
//! | update | PUT | `/api/books/{id}` |
//! | delete | DELETE | `/api/books/{id}` |
//! | search | POST | `/api/books/search` |
//! | relevance search | POST | `/api/search/ai` |
//! | summarize | POST | `/api/search/summarize` |
//! | register | POST | `/api/auth/register` |
//! | login | POST | `/api/auth/login` |
//! | current user | GET | `/api/auth/me` |
//! | health | GET | `/health` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{ "success": false, "message": ..., "code": ... }`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Bad request / validation error |
//! | 401 | unauthorized | Missing or rejected credentials |
//! | 404 | not-found | Book not found |
//! | 409 | conflict | Duplicate ISBN or email |
//! | 500 | exception | Internal server error |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and the error envelope
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, accounts, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for query strings and bodies
//! - [`responses`] - Success envelopes
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit};
use http::StatusCode;
use libris_catalog::core::BookStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Crate version, reported by the health check.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: BookStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all routes plus the middleware stack: request ids, tracing,
/// request timeout, body size limit and, when enabled, CORS.
///
/// # Example
///
/// ```rust
/// use libris_rest::{create_app_with_config, ServerConfig};
/// use libris_catalog::backends::memory::MemoryBackend;
///
/// let config = ServerConfig {
///     port: 8080,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: BookStorage + 'static,
{
    info!(
        backend = storage.backend_name(),
        "Creating REST API server"
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at startup. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "libris={level},libris_rest={level},libris_catalog={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
