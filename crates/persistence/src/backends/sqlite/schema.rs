//! SQLite schema for the catalog tables.
//!
//! The production catalog is loaded by an external indexer; this schema lets
//! the service start against an empty file and gives tests something to seed.

use rusqlite::Connection;

use crate::error::{BackendError, StorageResult};

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS song (
    songid TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    artist TEXT,
    banner_path TEXT,
    music_path TEXT,
    song_dir_path TEXT,
    file_extension TEXT
);

CREATE TABLE IF NOT EXISTS pack (
    packid TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    download_link TEXT,
    pack_banner_path TEXT
);

CREATE TABLE IF NOT EXISTS pack_song_map (
    packid TEXT NOT NULL REFERENCES pack(packid),
    songid TEXT NOT NULL REFERENCES song(songid),
    PRIMARY KEY (packid, songid)
);

CREATE TABLE IF NOT EXISTS chart (
    chartid TEXT PRIMARY KEY,
    songid TEXT NOT NULL REFERENCES song(songid),
    chartname TEXT,
    stepstype TEXT,
    description TEXT,
    chartstyle TEXT,
    difficulty TEXT,
    meter INTEGER,
    credit TEXT,
    stops_count INTEGER,
    delays_count INTEGER,
    warps_count INTEGER,
    scrolls_count INTEGER,
    fakes_count INTEGER,
    speeds_count INTEGER,
    stream REAL,
    voltage REAL,
    air REAL,
    freeze REAL,
    chaos REAL
);

CREATE TABLE IF NOT EXISTS song_bpm (
    songid TEXT NOT NULL REFERENCES song(songid),
    song_bpm REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS song_time_signature (
    songid TEXT NOT NULL REFERENCES song(songid),
    time_signature_numerator INTEGER NOT NULL,
    time_signature_denominator INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_pack_song_map_songid ON pack_song_map(songid);
CREATE INDEX IF NOT EXISTS idx_chart_songid ON chart(songid);
CREATE INDEX IF NOT EXISTS idx_song_bpm_songid ON song_bpm(songid);
CREATE INDEX IF NOT EXISTS idx_song_time_signature_songid ON song_time_signature(songid);
CREATE INDEX IF NOT EXISTS idx_song_title ON song(title);
";

/// Creates the catalog tables and indexes if they do not exist.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(CREATE_TABLES).map_err(|e| {
        crate::error::StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: format!("Failed to create catalog tables: {}", e),
            source: Some(Box::new(e)),
        })
    })?;

    tracing::debug!("SQLite catalog schema ready");
    Ok(())
}
