//! Catalog operations and the executor abstraction they run against.
//!
//! - [`QueryExecutor`] - runs statements and scans rows, implemented per backend
//! - [`catalog`] - search, song lookup and pack lookup

mod backend;
pub mod catalog;
mod executor;

pub use backend::BackendKind;
pub use catalog::{find_pack, find_song, search_songs};
pub use executor::QueryExecutor;
