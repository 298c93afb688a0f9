//! # smdb-rest - StepManiaDB catalog HTTP API
//!
//! An axum router over the song catalog in `smdb-persistence`. Clients search
//! songs with free-form filters and receive paginated, nested JSON documents.
//!
//! ## Backend Support
//!
//! - `sqlite` - SQLite backend (default)
//! - `postgres` - PostgreSQL backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smdb_rest::{create_app, ServerConfig};
//! use smdb_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("smdb.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
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
//! | song search | GET | `/songs?[filters]` |
//! | song lookup | GET | `/songs/[songid]` |
//! | pack lookup | GET | `/packs/[packid]` |
//! | pack submission | POST | `/packs` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": {"code": "...", "message": "..."}}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Unparseable filter or submission |
//! | 404 | not-found | No song or pack with that id |
//! | 500 | exception | Query or row scan failure |
//! | 503 | transient | Database unreachable (health check) |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and response bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (executor, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for search filters
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use smdb_persistence::core::QueryExecutor;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<E>(executor: E) -> Router
where
    E: QueryExecutor + 'static,
{
    create_app_with_config(executor, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use smdb_rest::{create_app_with_config, ServerConfig};
/// use smdb_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     max_page_size: 50,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<E>(executor: E, config: ServerConfig) -> Router
where
    E: QueryExecutor + 'static,
{
    info!(
        "Creating catalog API server with backend: {}",
        executor.backend_name()
    );

    let state = AppState::new(Arc::new(executor), config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
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
/// `RUST_LOG` takes precedence over `level` when set. Call once at startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "smdb_rest={level},smdb_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
