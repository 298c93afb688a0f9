//! Folding of flat join rows into nested entities.
//!
//! A song with two charts, one tempo value and one time signature arrives as
//! two rows. The aggregators collapse such rows back into one [`Song`], keeping
//! each chart, tempo value and time signature once, in the order first seen.

use std::collections::{HashMap, HashSet};

use crate::types::{Bpm, Pack, PackRow, Song, SongRow, TimeSignature};

#[derive(Default)]
struct SeenParts {
    charts: HashSet<String>,
    bpms: HashSet<u64>,
    time_signatures: HashSet<TimeSignature>,
}

/// Groups song rows by song id, preserving first-seen song order.
#[derive(Default)]
pub struct SongAggregator {
    index: HashMap<String, usize>,
    songs: Vec<Song>,
    seen: Vec<SeenParts>,
}

impl SongAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one row into the aggregate.
    pub fn push(&mut self, row: SongRow) {
        let position = match self.index.get(&row.song_id) {
            Some(&position) => position,
            None => {
                let position = self.songs.len();
                self.index.insert(row.song_id.clone(), position);
                self.songs.push(Song {
                    song_id: row.song_id.clone(),
                    title: row.title.clone(),
                    artist: row.artist.clone(),
                    banner_path: row.banner_path.clone(),
                    music_path: row.music_path.clone(),
                    song_dir_path: row.song_dir_path.clone(),
                    file_extension: row.file_extension.clone(),
                    bpms: Vec::new(),
                    time_signatures: Vec::new(),
                    charts: Vec::new(),
                    pack_id: row.pack_id.clone(),
                    pack_name: row.pack_name.clone(),
                });
                self.seen.push(SeenParts::default());
                position
            }
        };

        let song = &mut self.songs[position];
        let seen = &mut self.seen[position];

        if seen.bpms.insert(row.bpm.to_bits()) {
            song.bpms.push(Bpm { value: row.bpm });
        }
        if seen.time_signatures.insert(row.time_signature) {
            song.time_signatures.push(row.time_signature);
        }
        if seen.charts.insert(row.chart.chart_id.clone()) {
            song.charts.push(row.chart);
        }
    }

    /// Returns the songs in first-seen order.
    pub fn finish(self) -> Vec<Song> {
        self.songs
    }
}

/// Aggregates a full result set of song rows.
pub fn aggregate_songs(rows: impl IntoIterator<Item = SongRow>) -> Vec<Song> {
    let mut aggregator = SongAggregator::new();
    for row in rows {
        aggregator.push(row);
    }
    aggregator.finish()
}

/// Folds the rows of a single pack into one [`Pack`].
#[derive(Default)]
pub struct PackAggregator {
    pack: Option<(String, String, String, String)>,
    songs: SongAggregator,
}

impl PackAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one row into the aggregate. Pack columns are taken from the first row.
    pub fn push(&mut self, row: PackRow) {
        if self.pack.is_none() {
            self.pack = Some((
                row.pack_id,
                row.pack_name,
                row.download_link,
                row.pack_banner_path,
            ));
        }
        self.songs.push(row.song);
    }

    /// Returns the pack, or `None` if no rows were pushed.
    pub fn finish(self) -> Option<Pack> {
        let (pack_id, pack_name, download_link, banner_path) = self.pack?;
        Some(Pack {
            pack_id,
            pack_name,
            download_link,
            banner_path,
            songs: self.songs.finish(),
        })
    }
}

/// Aggregates a full result set of pack rows.
pub fn aggregate_pack(rows: impl IntoIterator<Item = PackRow>) -> Option<Pack> {
    let mut aggregator = PackAggregator::new();
    for row in rows {
        aggregator.push(row);
    }
    aggregator.finish()
}
