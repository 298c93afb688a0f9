//! Song handlers.
//!
//! - `GET [base]/songs?[filters]` - filtered, paginated song search
//! - `GET [base]/songs/[songid]` - a single song

use axum::{
    Json,
    extract::{Path, State},
};
use smdb_persistence::core::{QueryExecutor, find_song, search_songs};
use smdb_persistence::types::{Song, SongPage};
use tracing::{debug, error};

use crate::error::{RestError, RestResult};
use crate::extractors::SearchQuery;
use crate::state::AppState;

/// Handler for song search.
///
/// # HTTP Request
///
/// `GET [base]/songs?title=...&meterMin=...&page=...`
///
/// # Response
///
/// - `200 OK` - A page of songs, possibly empty
/// - `400 Bad Request` - A numeric option did not parse
/// - `500 Internal Server Error` - The query failed
///
/// # Example
///
/// ```http
/// GET /songs?stepstype=dance-single&meterMin=10&meterMax=15&pageSize=50 HTTP/1.1
/// Host: smdb.example.com
/// ```
pub async fn search_songs_handler<E>(
    State(state): State<AppState<E>>,
    SearchQuery(filters): SearchQuery,
) -> RestResult<Json<SongPage>>
where
    E: QueryExecutor,
{
    debug!(
        page = filters.page.page(),
        page_size = filters.page.page_size(),
        "Processing song search request"
    );

    let page = search_songs(state.executor(), &filters)
        .await
        .inspect_err(|e| {
            error!(
                error = %e,
                filters = %filters.to_query_string(),
                page = filters.page.page(),
                "Song search failed"
            );
        })?;

    Ok(Json(page))
}

/// Handler for reading a single song.
///
/// # HTTP Request
///
/// `GET [base]/songs/[songid]`
///
/// # Response
///
/// - `200 OK` - The song with all its charts
/// - `404 Not Found` - No song has this id
pub async fn song_handler<E>(
    State(state): State<AppState<E>>,
    Path(song_id): Path<String>,
) -> RestResult<Json<Song>>
where
    E: QueryExecutor,
{
    debug!(song_id = %song_id, "Processing song request");

    let song = find_song(state.executor(), &song_id)
        .await
        .inspect_err(|e| error!(error = %e, song_id = %song_id, "Song lookup failed"))?;

    song.map(Json)
        .ok_or_else(|| RestError::song_not_found(song_id))
}
