//! StepManiaDB server
//!
//! Serves the song catalog over HTTP from a SQLite file or a PostgreSQL
//! database.

use clap::Parser;
use smdb_persistence::core::BackendKind;
use smdb_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_kind = BackendKind::from_database_url(config.database_url());

    info!(
        port = config.port,
        host = %config.host,
        backend = %backend_kind,
        "Starting StepManiaDB server"
    );

    match backend_kind {
        BackendKind::Sqlite => start_sqlite(config).await,
        BackendKind::Postgres => start_postgres(config).await,
    }
}

/// Starts the server with a SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    use smdb_persistence::backends::sqlite::SqliteBackend;

    let db_path = config.database_url();
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = SqliteBackend::open(db_path)?;
    if config.init_schema {
        info!("Creating missing catalog tables");
        backend.init_schema()?;
    }

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p smdb-server --features sqlite"
    )
}

/// Starts the server with a PostgreSQL backend.
#[cfg(feature = "postgres")]
async fn start_postgres(config: ServerConfig) -> anyhow::Result<()> {
    use smdb_persistence::backends::postgres::PostgresBackend;

    info!("Initializing PostgreSQL backend from connection string");
    let backend = PostgresBackend::from_connection_string(config.database_url()).await?;
    if config.init_schema {
        info!("Creating missing catalog tables");
        backend.init_schema().await?;
    }

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when postgres feature is not enabled.
#[cfg(not(feature = "postgres"))]
async fn start_postgres(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The postgres backend requires the 'postgres' feature. \
         Build with: cargo build -p smdb-server --features postgres"
    )
}

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("At least one database backend feature must be enabled");
