//! StepManiaDB catalog persistence.
//!
//! Read-only access to a catalog of rhythm-game songs stored in a relational
//! database. The central operation is filtered song search: validated
//! [`SearchFilters`](types::SearchFilters) become a parameterized count
//! statement and a page statement, and the flat join rows of the page are
//! folded into nested [`Song`](types::Song) values.
//!
//! # Backend Features
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `postgres` - PostgreSQL via `deadpool-postgres`
//!
//! # Architecture
//!
//! - [`types`] - entities, filters and pagination
//! - [`query`] - predicates, statement builders, row scanning and aggregation
//! - [`core`] - the [`QueryExecutor`](core::QueryExecutor) trait and catalog operations
//! - [`backends`] - backend implementations
//! - [`error`] - error types for all operations
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use std::collections::HashMap;
//!
//! use smdb_persistence::backends::sqlite::SqliteBackend;
//! use smdb_persistence::core::search_songs;
//! use smdb_persistence::types::SearchFilters;
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let mut params = HashMap::new();
//! params.insert("title".to_string(), "butterfly".to_string());
//! let filters = SearchFilters::from_params(&params)?;
//!
//! let page = search_songs(&backend, &filters).await?;
//! assert_eq!(page.total_songs_count, 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backends;
pub mod core;
pub mod error;
pub mod query;
pub mod types;

pub use error::{StorageError, StorageResult};
