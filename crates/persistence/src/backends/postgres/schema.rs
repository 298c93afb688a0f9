//! PostgreSQL schema for the catalog tables.

use deadpool_postgres::Client;

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
    stream DOUBLE PRECISION,
    voltage DOUBLE PRECISION,
    air DOUBLE PRECISION,
    freeze DOUBLE PRECISION,
    chaos DOUBLE PRECISION
);

CREATE TABLE IF NOT EXISTS song_bpm (
    songid TEXT NOT NULL REFERENCES song(songid),
    song_bpm DOUBLE PRECISION NOT NULL
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
pub async fn initialize_schema(client: &Client) -> StorageResult<()> {
    client.batch_execute(CREATE_TABLES).await.map_err(|e| {
        crate::error::StorageError::Backend(BackendError::Internal {
            backend_name: "postgres".to_string(),
            message: format!("Failed to create catalog tables: {}", e),
            source: Some(Box::new(e)),
        })
    })?;

    tracing::debug!("PostgreSQL catalog schema ready");
    Ok(())
}
