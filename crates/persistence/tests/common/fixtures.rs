//! Catalog fixtures for SQLite-backed tests.
//!
//! Fixtures are plain builders; [`seed`] writes them through the same tables the
//! production indexer fills.

#![allow(dead_code)]

use rusqlite::params;

use smdb_persistence::backends::sqlite::SqliteBackend;

/// A chart fixture.
#[derive(Debug, Clone)]
pub struct ChartFixture {
    pub id: String,
    pub steps_type: String,
    pub difficulty: String,
    pub meter: i32,
    pub credit: Option<String>,
}

impl ChartFixture {
    /// A `dance-single` chart with the given meter.
    pub fn new(id: impl Into<String>, meter: i32) -> Self {
        Self {
            id: id.into(),
            steps_type: "dance-single".to_string(),
            difficulty: "Hard".to_string(),
            meter,
            credit: None,
        }
    }

    pub fn with_steps_type(mut self, steps_type: &str) -> Self {
        self.steps_type = steps_type.to_string();
        self
    }

    pub fn with_credit(mut self, credit: &str) -> Self {
        self.credit = Some(credit.to_string());
        self
    }
}

/// A song fixture with its charts, tempo values, time signatures and pack.
#[derive(Debug, Clone)]
pub struct SongFixture {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub pack_id: String,
    pub charts: Vec<ChartFixture>,
    pub bpms: Vec<f64>,
    pub time_signatures: Vec<(i32, i32)>,
}

impl SongFixture {
    /// A song in pack `p1` with no charts, 120 BPM and 4/4.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: "Unknown".to_string(),
            pack_id: "p1".to_string(),
            charts: vec![],
            bpms: vec![120.0],
            time_signatures: vec![(4, 4)],
        }
    }

    pub fn with_artist(mut self, artist: &str) -> Self {
        self.artist = artist.to_string();
        self
    }

    pub fn in_pack(mut self, pack_id: &str) -> Self {
        self.pack_id = pack_id.to_string();
        self
    }

    pub fn with_chart(mut self, chart: ChartFixture) -> Self {
        self.charts.push(chart);
        self
    }

    pub fn with_bpms(mut self, bpms: Vec<f64>) -> Self {
        self.bpms = bpms;
        self
    }

    pub fn with_time_signatures(mut self, signatures: Vec<(i32, i32)>) -> Self {
        self.time_signatures = signatures;
        self
    }
}

/// Creates an in-memory backend with the catalog schema.
pub fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

/// Inserts a pack row.
pub fn seed_pack(backend: &SqliteBackend, id: &str, name: &str, download_link: &str) {
    let conn = backend.get_connection().expect("connection");
    conn.execute(
        "INSERT INTO pack (packid, name, download_link, pack_banner_path) VALUES (?1, ?2, ?3, ?4)",
        params![id, name, download_link, format!("packs/{}/banner.png", id)],
    )
    .expect("insert pack");
}

/// Inserts a song with its charts, tempo values, time signatures and pack membership.
pub fn seed(backend: &SqliteBackend, song: &SongFixture) {
    let conn = backend.get_connection().expect("connection");

    conn.execute(
        "INSERT INTO song (songid, title, artist, banner_path, music_path, song_dir_path, file_extension)
         VALUES (?1, ?2, ?3, NULL, ?4, ?5, 'ssc')",
        params![
            song.id,
            song.title,
            song.artist,
            format!("songs/{}/music.ogg", song.id),
            format!("songs/{}", song.id),
        ],
    )
    .expect("insert song");

    conn.execute(
        "INSERT INTO pack_song_map (packid, songid) VALUES (?1, ?2)",
        params![song.pack_id, song.id],
    )
    .expect("insert pack membership");

    for chart in &song.charts {
        conn.execute(
            "INSERT INTO chart (chartid, songid, chartname, stepstype, description, chartstyle,
                                difficulty, meter, credit, stops_count, delays_count, warps_count,
                                scrolls_count, fakes_count, speeds_count, stream, voltage, air,
                                freeze, chaos)
             VALUES (?1, ?2, '', ?3, NULL, '', ?4, ?5, ?6, 1, 0, 0, 0, 0, NULL,
                     0.5, 0.4, 0.1, 0.0, 0.2)",
            params![
                chart.id,
                song.id,
                chart.steps_type,
                chart.difficulty,
                chart.meter,
                chart.credit,
            ],
        )
        .expect("insert chart");
    }

    for bpm in &song.bpms {
        conn.execute(
            "INSERT INTO song_bpm (songid, song_bpm) VALUES (?1, ?2)",
            params![song.id, bpm],
        )
        .expect("insert bpm");
    }

    for (numerator, denominator) in &song.time_signatures {
        conn.execute(
            "INSERT INTO song_time_signature (songid, time_signature_numerator, time_signature_denominator)
             VALUES (?1, ?2, ?3)",
            params![song.id, numerator, denominator],
        )
        .expect("insert time signature");
    }
}
