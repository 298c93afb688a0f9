//! Builders for the catalog's SQL statements.
//!
//! All statements share one join graph:
//!
//! ```text
//! song ⨝ pack_song_map ⨝ pack ⨝ chart ⨝ song_bpm ⨝ song_time_signature
//! ```
//!
//! The count and page statements render their predicates from the same
//! [`SearchFilters`], so both bind the same leading parameters.

use tracing::debug;

use crate::types::SearchFilters;

use super::predicate::{Dialect, SqlFragment, SqlParam, predicates_for};

/// Columns selected for every song row, in scan order.
pub const SONG_COLUMNS: &[&str] = &[
    "song.songid",
    "song.title",
    "song.artist",
    "song.banner_path",
    "song.music_path",
    "song.song_dir_path",
    "song.file_extension",
    "song_bpm.song_bpm",
    "song_time_signature.time_signature_numerator",
    "song_time_signature.time_signature_denominator",
    "chart.chartid",
    "chart.chartname",
    "chart.stepstype",
    "chart.description",
    "chart.chartstyle",
    "chart.difficulty",
    "chart.meter",
    "chart.credit",
    "chart.stops_count",
    "chart.delays_count",
    "chart.warps_count",
    "chart.scrolls_count",
    "chart.fakes_count",
    "chart.speeds_count",
    "chart.stream",
    "chart.voltage",
    "chart.air",
    "chart.freeze",
    "chart.chaos",
    "pack.packid",
    "pack.name",
];

/// Pack columns selected after [`SONG_COLUMNS`] by the pack statement.
pub const PACK_COLUMNS: &[&str] = &["pack.download_link", "pack.pack_banner_path"];

const JOINS: &str = "JOIN pack_song_map ON pack_song_map.songid = song.songid \
     JOIN pack ON pack.packid = pack_song_map.packid \
     JOIN chart ON chart.songid = song.songid \
     JOIN song_bpm ON song_bpm.songid = song.songid \
     JOIN song_time_signature ON song_time_signature.songid = song.songid";

const ORDER_BY_TITLE: &str = "ORDER BY song.title ASC, song.songid ASC";

/// Builds catalog statements for one SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder {
    dialect: Dialect,
}

impl QueryBuilder {
    /// Creates a builder emitting placeholders for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Counts the distinct songs matching `filters`.
    pub fn count_query(&self, filters: &SearchFilters) -> SqlFragment {
        let mut fragment = SqlFragment::new(self.dialect);
        fragment.push_sql("SELECT COUNT(DISTINCT song.songid) FROM song ");
        fragment.push_sql(JOINS);
        fragment.push_sql(" WHERE ");
        fragment.push_predicates(&predicates_for(filters));

        debug!(
            sql = %fragment.sql,
            param_count = fragment.params.len(),
            "Built song count query"
        );
        fragment
    }

    /// Selects every row of the songs on the requested page.
    ///
    /// The inner statement picks the page's song ids; the outer statement joins
    /// them back to the full graph so each song comes with all its charts,
    /// tempo values and time signatures.
    pub fn page_query(&self, filters: &SearchFilters) -> SqlFragment {
        let mut fragment = SqlFragment::new(self.dialect);
        fragment.push_sql("SELECT ");
        fragment.push_sql(&SONG_COLUMNS.join(", "));
        fragment.push_sql(" FROM (SELECT DISTINCT song.songid, song.title FROM song ");
        fragment.push_sql(JOINS);
        fragment.push_sql(" WHERE ");
        fragment.push_predicates(&predicates_for(filters));

        let limit = fragment.add_param(SqlParam::BigInt(filters.page.limit()));
        let offset = fragment.add_param(SqlParam::BigInt(filters.page.offset()));
        fragment.push_sql(&format!(
            " {} LIMIT {} OFFSET {}) AS filtered_songs",
            ORDER_BY_TITLE, limit, offset
        ));
        fragment.push_sql(" JOIN song ON song.songid = filtered_songs.songid ");
        fragment.push_sql(JOINS);
        fragment.push_sql(" ");
        fragment.push_sql(ORDER_BY_TITLE);

        debug!(
            sql = %fragment.sql,
            param_count = fragment.params.len(),
            "Built song page query"
        );
        fragment
    }

    /// Selects every row of one song.
    pub fn song_query(&self, song_id: &str) -> SqlFragment {
        let mut fragment = SqlFragment::new(self.dialect);
        fragment.push_sql("SELECT ");
        fragment.push_sql(&SONG_COLUMNS.join(", "));
        fragment.push_sql(" FROM song ");
        fragment.push_sql(JOINS);
        let id = fragment.add_param(SqlParam::text(song_id));
        fragment.push_sql(&format!(" WHERE song.songid = {}", id));

        debug!(sql = %fragment.sql, "Built song query");
        fragment
    }

    /// Selects every row of one pack, songs ordered by title.
    pub fn pack_query(&self, pack_id: &str) -> SqlFragment {
        let mut fragment = SqlFragment::new(self.dialect);
        fragment.push_sql("SELECT ");
        fragment.push_sql(&SONG_COLUMNS.join(", "));
        fragment.push_sql(", ");
        fragment.push_sql(&PACK_COLUMNS.join(", "));
        fragment.push_sql(" FROM song ");
        fragment.push_sql(JOINS);
        let id = fragment.add_param(SqlParam::text(pack_id));
        fragment.push_sql(&format!(" WHERE pack.packid = {} {}", id, ORDER_BY_TITLE));

        debug!(sql = %fragment.sql, "Built pack query");
        fragment
    }
}
