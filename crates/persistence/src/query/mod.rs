//! SQL construction and result aggregation.
//!
//! - [`predicate`] - filter predicates and parameter binding
//! - [`builder`] - the count, page, song and pack statements
//! - [`scan`] - driver rows to flat [`SongRow`](crate::types::SongRow) values
//! - [`aggregate`] - flat rows to nested songs and packs

pub mod aggregate;
pub mod builder;
pub mod predicate;
pub mod scan;

pub use aggregate::{PackAggregator, SongAggregator, aggregate_pack, aggregate_songs};
pub use builder::{PACK_COLUMNS, QueryBuilder, SONG_COLUMNS};
pub use predicate::{Dialect, Predicate, SqlFragment, SqlParam, escape_like, predicates_for};
pub use scan::{RowSource, scan_pack_row, scan_song_row};
