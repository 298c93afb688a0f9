//! Server configuration for the catalog API.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SMDB_SERVER_PORT` | 8080 | Server port |
//! | `SMDB_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `SMDB_LOG_LEVEL` | info | Log level |
//! | `SMDB_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SMDB_ENABLE_CORS` | true | Enable CORS |
//! | `SMDB_CORS_ORIGINS` | * | Allowed origins |
//! | `SMDB_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `SMDB_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `SMDB_DATABASE_URL` | smdb.db | `postgres://` URL or SQLite path |
//! | `SMDB_DEFAULT_PAGE_SIZE` | 20 | Page size when none is requested |
//! | `SMDB_MAX_PAGE_SIZE` | 100 | Largest page size a request may ask for |
//! | `SMDB_INIT_SCHEMA` | false | Create missing catalog tables at startup |
//!
//! # Example
//!
//! ```rust
//! use smdb_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;
use smdb_persistence::types::MAX_PAGE_SIZE;

/// Server configuration for the catalog API.
///
/// Built from command line arguments and `SMDB_*` environment variables with
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "smdb")]
#[command(about = "StepManiaDB song catalog server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SMDB_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SMDB_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "SMDB_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "SMDB_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "SMDB_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "SMDB_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "SMDB_CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "SMDB_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Database connection string: a `postgres://` URL or a SQLite file path.
    #[arg(long, env = "SMDB_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Default page size for song search.
    #[arg(long, env = "SMDB_DEFAULT_PAGE_SIZE", default_value = "20")]
    pub default_page_size: u32,

    /// Maximum page size for song search.
    #[arg(long, env = "SMDB_MAX_PAGE_SIZE", default_value = "100")]
    pub max_page_size: u32,

    /// Create missing catalog tables at startup.
    ///
    /// Off by default: the catalog schema is owned by the indexer.
    #[arg(long, env = "SMDB_INIT_SCHEMA")]
    pub init_schema: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            database_url: None,
            default_page_size: 20,
            max_page_size: 100,
            init_schema: false,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured database URL, or the default SQLite file.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or("smdb.db")
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.max_page_size > MAX_PAGE_SIZE {
            errors.push(format!("Max page size cannot exceed {}", MAX_PAGE_SIZE));
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            database_url: Some(":memory:".to_string()),
            default_page_size: 20,
            max_page_size: 100,
            init_schema: false,
        }
    }
}
