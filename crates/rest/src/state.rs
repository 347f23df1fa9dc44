//! Application state for the Libris REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the book storage backend, the account registry and the
//! server configuration.

use std::sync::Arc;

use libris_catalog::accounts::AccountRegistry;
use libris_catalog::core::BookStorage;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`BookStorage`])
///
/// # Example
///
/// ```rust
/// use libris_rest::{AppState, ServerConfig};
/// use libris_catalog::backends::memory::MemoryBackend;
/// use std::sync::Arc;
///
/// let backend = MemoryBackend::new();
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// assert_eq!(state.default_page_size(), 10);
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Registered users and open sessions.
    accounts: Arc<AccountRegistry>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            accounts: Arc::clone(&self.accounts),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: BookStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    ///
    /// The account registry starts empty.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            accounts: Arc::new(AccountRegistry::new()),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the account registry.
    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the default page size for listings.
    pub fn default_page_size(&self) -> usize {
        self.config.default_page_size
    }

    /// Returns the maximum page size for listings.
    pub fn max_page_size(&self) -> usize {
        self.config.max_page_size
    }
}
