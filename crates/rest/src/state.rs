//! Application state for the catalog REST API.
//!
//! Holds the query executor and the server configuration shared by all
//! request handlers.

use std::sync::Arc;

use smdb_persistence::core::QueryExecutor;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `E` - The database backend (must implement [`QueryExecutor`])
///
/// # Example
///
/// ```rust,ignore
/// use smdb_rest::{AppState, ServerConfig};
/// use smdb_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<E> {
    executor: Arc<E>,
    config: Arc<ServerConfig>,
}

// E sits behind an Arc and need not be Clone
impl<E> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            config: Arc::clone(&self.config),
        }
    }
}

impl<E: QueryExecutor> AppState<E> {
    /// Creates a new AppState with the given executor and configuration.
    pub fn new(executor: Arc<E>, config: ServerConfig) -> Self {
        Self {
            executor,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the query executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the default page size for song search.
    pub fn default_page_size(&self) -> u32 {
        self.config.default_page_size
    }

    /// Returns the maximum page size for song search.
    pub fn max_page_size(&self) -> u32 {
        self.config.max_page_size
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;
    use smdb_persistence::backends::sqlite::SqliteBackend;

    fn backend() -> Arc<SqliteBackend> {
        Arc::new(SqliteBackend::in_memory().unwrap())
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(backend(), ServerConfig::default());
        assert_eq!(state.executor().backend_name(), "sqlite");
        assert_eq!(state.default_page_size(), 20);
        assert_eq!(state.max_page_size(), 100);
    }

    #[test]
    fn test_app_state_config_access() {
        let config = ServerConfig {
            default_page_size: 10,
            max_page_size: 50,
            ..Default::default()
        };
        let state = AppState::new(backend(), config);
        assert_eq!(state.default_page_size(), 10);
        assert_eq!(state.max_page_size(), 50);
    }

    #[test]
    fn test_app_state_clone() {
        let state = AppState::new(backend(), ServerConfig::default());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.executor(), cloned.executor()));
    }
}
