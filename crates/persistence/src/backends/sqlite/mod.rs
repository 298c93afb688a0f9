//! SQLite backend.
//!
//! Supports in-memory databases (tests and local development) and file-based
//! databases. Statements run synchronously on a pooled `rusqlite` connection.
//!
//! # Example
//!
//! ```no_run
//! use smdb_persistence::backends::sqlite::SqliteBackend;
//! use smdb_persistence::core::search_songs;
//! use smdb_persistence::types::SearchFilters;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("smdb.db")?;
//! backend.init_schema()?;
//!
//! let page = search_songs(&backend, &SearchFilters::default()).await?;
//! println!("{} songs", page.total_songs_count);
//! # Ok(())
//! # }
//! ```

mod backend;
mod executor;
mod functions;
pub mod schema;

pub use backend::{SqliteBackend, SqliteBackendConfig};
