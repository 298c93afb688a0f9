//! REST API test harness.
//!
//! Builds the full router over an in-memory SQLite backend seeded with a small
//! catalog.

#![allow(dead_code)]

use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use smdb_persistence::backends::sqlite::SqliteBackend;
use smdb_rest::{ServerConfig, create_app_with_config};

/// Two packs, four songs.
///
/// | song | title | pack | charts (stepstype meter) | bpm | ts |
/// |------|-------|------|--------------------------|-----|----|
/// | s1 | Butterfly | p1 | c1 single 5, c2 single 9 | 135 | 4/4 |
/// | s2 | MAX 300 | p1 | c3 single 12, c4 double 13 | 150, 300 | 4/4 |
/// | s3 | Paranoia | p2 | c5 single 10 | 180 | 4/4, 7/8 |
/// | s4 | Xepher | p2 | c6 single 14 | 190 | 4/4 |
pub const CATALOG_SQL: &str = "
    INSERT INTO pack (packid, name, download_link, pack_banner_path) VALUES
        ('p1', 'DDR Classics', 'https://example.com/p1.zip', 'packs/p1/banner.png'),
        ('p2', 'Konami Originals', 'https://example.com/p2.zip', NULL);

    INSERT INTO song (songid, title, artist, banner_path, music_path, song_dir_path, file_extension) VALUES
        ('s1', 'Butterfly', 'SMiLE.dk', 'songs/s1/bn.png', 'songs/s1/music.ogg', 'songs/s1', 'sm'),
        ('s2', 'MAX 300', 'Omega', NULL, 'songs/s2/music.ogg', 'songs/s2', 'ssc'),
        ('s3', 'Paranoia', '180', NULL, 'songs/s3/music.ogg', 'songs/s3', 'sm'),
        ('s4', 'Xepher', 'Tatsh', NULL, 'songs/s4/music.ogg', 'songs/s4', 'ssc');

    INSERT INTO pack_song_map (packid, songid) VALUES
        ('p1', 's1'), ('p1', 's2'), ('p2', 's3'), ('p2', 's4');

    INSERT INTO chart (chartid, songid, chartname, stepstype, description, chartstyle, difficulty,
                       meter, credit, stops_count, delays_count, warps_count, scrolls_count,
                       fakes_count, speeds_count, stream, voltage, air, freeze, chaos) VALUES
        ('c1', 's1', '', 'dance-single', NULL, '', 'Medium', 5, 'Konami', 0, 0, 0, 0, 0, 0, 0.3, 0.3, 0.1, 0.0, 0.1),
        ('c2', 's1', '', 'dance-single', NULL, '', 'Hard', 9, 'Konami', 0, 0, 0, 0, 0, 0, 0.5, 0.4, 0.2, 0.0, 0.2),
        ('c3', 's2', '', 'dance-single', NULL, '', 'Challenge', 12, 'Konami', 1, 0, 0, 0, 0, 0, 0.9, 0.8, 0.5, 0.1, 0.7),
        ('c4', 's2', '', 'dance-double', NULL, '', 'Challenge', 13, 'Konami', 1, 0, 0, 0, 0, 0, 0.9, 0.8, 0.5, 0.1, 0.8),
        ('c5', 's3', '', 'dance-single', NULL, '', 'Hard', 10, 'Naoki', 0, 0, 0, 0, 0, 0, 0.7, 0.6, 0.3, 0.0, 0.4),
        ('c6', 's4', '', 'dance-single', NULL, '', 'Challenge', 14, 'Tatsh', 2, 0, 0, 0, 0, 0, 0.9, 0.9, 0.6, 0.2, 0.9);

    INSERT INTO song_bpm (songid, song_bpm) VALUES
        ('s1', 135.0), ('s2', 150.0), ('s2', 300.0), ('s3', 180.0), ('s4', 190.0);

    INSERT INTO song_time_signature (songid, time_signature_numerator, time_signature_denominator) VALUES
        ('s1', 4, 4), ('s2', 4, 4), ('s3', 4, 4), ('s3', 7, 8), ('s4', 4, 4);
";

/// Test harness wrapping an [`axum_test::TestServer`].
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,
}

impl RestTestHarness {
    /// Creates a harness over the seeded catalog with test configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness over the seeded catalog with the given configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        Self::seeded(&[CATALOG_SQL], config)
    }

    /// Creates a harness over the seeded catalog plus the given extra rows.
    pub fn with_extra_rows(sql: &str) -> Self {
        Self::seeded(&[CATALOG_SQL, sql], ServerConfig::for_testing())
    }

    fn seeded(batches: &[&str], config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        {
            let conn = backend.get_connection().expect("connection");
            for sql in batches {
                conn.execute_batch(sql).expect("seed catalog");
            }
        }
        Self::from_backend(backend, config)
    }

    /// Creates a harness over a backend without any tables.
    ///
    /// Every catalog query fails against it.
    pub fn without_schema() -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        Self::from_backend(backend, ServerConfig::for_testing())
    }

    fn from_backend(backend: SqliteBackend, config: ServerConfig) -> Self {
        let app = create_app_with_config(backend, config);
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }
}

/// Returns the song ids of a search response, in order.
pub fn song_ids(body: &Value) -> Vec<String> {
    body["songs"]
        .as_array()
        .expect("songs array")
        .iter()
        .map(|song| song["songId"].as_str().expect("songId").to_string())
        .collect()
}
