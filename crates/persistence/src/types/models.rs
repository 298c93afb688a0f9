//! Catalog entities and the flat rows they are assembled from.
//!
//! The nested types ([`Song`], [`Pack`], [`Chart`], ...) are what the service
//! returns to clients. They are built once per request from [`SongRow`] and
//! [`PackRow`] values, which mirror a single row of the song/pack/chart/tempo/
//! time-signature join.

use serde::{Deserialize, Serialize};

/// A playable chart (one difficulty of one step style) belonging to a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Chart identifier.
    pub chart_id: String,
    /// Chart name as authored.
    pub name: String,
    /// Step style, e.g. `dance-single`.
    pub steps_type: String,
    /// Free-form chart description.
    pub description: String,
    /// Chart style.
    pub chart_style: String,
    /// Difficulty label, e.g. `Challenge`.
    pub difficulty: String,
    /// Numeric difficulty meter.
    pub meter: i32,
    /// Chart author.
    pub credit: String,
    /// Number of stops.
    pub stops_count: i32,
    /// Number of delays.
    pub delays_count: i32,
    /// Number of warps.
    pub warps_count: i32,
    /// Number of scroll segments.
    pub scrolls_count: i32,
    /// Number of fake segments.
    pub fakes_count: i32,
    /// Number of speed changes.
    pub speeds_count: i32,
    /// Stream intensity.
    pub stream: f64,
    /// Voltage intensity.
    pub voltage: f64,
    /// Air intensity.
    pub air: f64,
    /// Freeze intensity.
    pub freeze: f64,
    /// Chaos intensity.
    pub chaos: f64,
}

/// One tempo value of a song.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bpm {
    /// Beats per minute.
    pub value: f64,
}

/// One time signature of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Beats per measure.
    pub numerator: i32,
    /// Beat unit.
    pub denominator: i32,
}

/// A song with its tempo values, time signatures and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Song identifier.
    pub song_id: String,
    /// Song title.
    pub title: String,
    /// Song artist.
    pub artist: String,
    /// Path of the banner image.
    pub banner_path: String,
    /// Path of the audio file.
    pub music_path: String,
    /// Directory containing the song files.
    pub song_dir_path: String,
    /// Extension of the simfile.
    pub file_extension: String,
    /// Distinct tempo values, in first-seen order.
    pub bpms: Vec<Bpm>,
    /// Distinct time signatures, in first-seen order.
    pub time_signatures: Vec<TimeSignature>,
    /// Distinct charts, in first-seen order.
    pub charts: Vec<Chart>,
    /// First pack the song was seen in.
    pub pack_id: String,
    /// Name of that pack.
    pub pack_name: String,
}

/// A pack with its member songs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    /// Pack identifier.
    pub pack_id: String,
    /// Pack name.
    pub pack_name: String,
    /// Where the pack can be downloaded.
    pub download_link: String,
    /// Path of the pack banner image.
    pub banner_path: String,
    /// Member songs ordered by title.
    pub songs: Vec<Song>,
}

/// A request to add a pack, pending manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackSubmission {
    /// Link the pack can be downloaded from.
    pub download_link: String,
}

/// One row of the denormalized song join.
///
/// The same song appears once per combination of chart, tempo, time signature
/// and pack membership.
#[derive(Debug, Clone, PartialEq)]
pub struct SongRow {
    /// `song.songid`
    pub song_id: String,
    /// `song.title`
    pub title: String,
    /// `song.artist`
    pub artist: String,
    /// `song.banner_path`
    pub banner_path: String,
    /// `song.music_path`
    pub music_path: String,
    /// `song.song_dir_path`
    pub song_dir_path: String,
    /// `song.file_extension`
    pub file_extension: String,
    /// `song_bpm.song_bpm`
    pub bpm: f64,
    /// `song_time_signature` numerator and denominator.
    pub time_signature: TimeSignature,
    /// The chart columns of this row.
    pub chart: Chart,
    /// `pack.packid`
    pub pack_id: String,
    /// `pack.name`
    pub pack_name: String,
}

/// One row of the denormalized pack join: the pack columns plus a song row.
#[derive(Debug, Clone, PartialEq)]
pub struct PackRow {
    /// `pack.packid`
    pub pack_id: String,
    /// `pack.name`
    pub pack_name: String,
    /// `pack.download_link`
    pub download_link: String,
    /// `pack.pack_banner_path`
    pub pack_banner_path: String,
    /// The song half of the row.
    pub song: SongRow,
}
