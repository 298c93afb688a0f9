//! Catalog operations.
//!
//! Each operation takes the executor explicitly and builds its statements for
//! the executor's dialect.

use tracing::{debug, instrument};

use crate::error::StorageResult;
use crate::query::{QueryBuilder, aggregate_pack, aggregate_songs};
use crate::types::{Pack, SearchFilters, Song, SongPage};

use super::executor::QueryExecutor;

/// Returns one page of songs matching `filters`.
///
/// Runs the count statement, then the page statement, then folds the page's
/// rows into songs ordered by title.
#[instrument(skip_all, fields(backend = executor.backend_name(), page = filters.page.page()))]
pub async fn search_songs<E>(executor: &E, filters: &SearchFilters) -> StorageResult<SongPage>
where
    E: QueryExecutor + ?Sized,
{
    let builder = QueryBuilder::new(executor.dialect());

    let total = executor.fetch_count(&builder.count_query(filters)).await?;
    let rows = executor.fetch_song_rows(&builder.page_query(filters)).await?;
    let row_count = rows.len();
    let songs = aggregate_songs(rows);

    debug!(total, row_count, song_count = songs.len(), "Song search complete");

    Ok(SongPage::new(filters.page, total, songs))
}

/// Looks up one song by id. Returns `None` when the song has no rows.
#[instrument(skip(executor), fields(backend = executor.backend_name()))]
pub async fn find_song<E>(executor: &E, song_id: &str) -> StorageResult<Option<Song>>
where
    E: QueryExecutor + ?Sized,
{
    let builder = QueryBuilder::new(executor.dialect());
    let rows = executor.fetch_song_rows(&builder.song_query(song_id)).await?;
    debug!(row_count = rows.len(), "Fetched song rows");

    Ok(aggregate_songs(rows).into_iter().next())
}

/// Looks up one pack and its songs by id. Returns `None` when the pack has no rows.
#[instrument(skip(executor), fields(backend = executor.backend_name()))]
pub async fn find_pack<E>(executor: &E, pack_id: &str) -> StorageResult<Option<Pack>>
where
    E: QueryExecutor + ?Sized,
{
    let builder = QueryBuilder::new(executor.dialect());
    let rows = executor.fetch_pack_rows(&builder.pack_query(pack_id)).await?;
    debug!(row_count = rows.len(), "Fetched pack rows");

    Ok(aggregate_pack(rows))
}
