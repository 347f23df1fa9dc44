//! REST API test harness.
//!
//! Provides a test server backed by an in-memory catalog.

use std::sync::Arc;

use axum_test::TestServer;
use libris_catalog::backends::memory::MemoryBackend;

use libris_rest::{AppState, ServerConfig, create_app_with_config, routing};

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::seeded();
///     let response = harness.server.get("/api/books/1").await;
///     response.assert_status_ok();
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend.
    pub backend: Arc<MemoryBackend>,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness over the given backend with the routes only.
    pub fn new(backend: MemoryBackend) -> Self {
        let config = ServerConfig::for_testing();
        let backend = Arc::new(backend);

        let state = AppState::new(Arc::clone(&backend), config.clone());
        let router = routing::create_routes(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            backend,
            config,
        }
    }

    /// Creates a harness over the eight sample books.
    pub fn seeded() -> Self {
        Self::new(MemoryBackend::with_sample_data().expect("Failed to seed sample data"))
    }

    /// Creates a harness over an empty catalog.
    pub fn empty() -> Self {
        Self::new(MemoryBackend::new())
    }
}

/// Creates a server with the full middleware stack.
pub fn full_app_server(config: ServerConfig) -> TestServer {
    let backend = MemoryBackend::with_sample_data().expect("Failed to seed sample data");
    let app = create_app_with_config(backend, config);
    TestServer::new(app).expect("Failed to create test server")
}
