//! The seam between catalog operations and a database.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::{BackendError, StorageResult};
use crate::query::{Dialect, SqlFragment};
use crate::types::{PackRow, SongRow};

use super::backend::BackendKind;

/// Executes catalog statements and scans their rows.
///
/// Implementations scan every row before returning. A row that fails to scan
/// fails the whole call with [`QueryError::Scan`](crate::error::QueryError::Scan).
#[async_trait]
pub trait QueryExecutor: Send + Sync + Debug {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Placeholder dialect statements must be built with.
    fn dialect(&self) -> Dialect;

    /// Runs a `COUNT` statement and returns its single value.
    async fn fetch_count(&self, query: &SqlFragment) -> StorageResult<u64>;

    /// Runs a statement selecting song rows.
    async fn fetch_song_rows(&self, query: &SqlFragment) -> StorageResult<Vec<SongRow>>;

    /// Runs a statement selecting pack rows.
    async fn fetch_pack_rows(&self, query: &SqlFragment) -> StorageResult<Vec<PackRow>>;

    /// Checks if the backend is healthy and accepting connections.
    async fn health_check(&self) -> Result<(), BackendError>;
}
