//! Conversion of driver rows into [`SongRow`] and [`PackRow`].
//!
//! Backends expose their row type through [`RowSource`]; the column layout is
//! the one selected by [`QueryBuilder`](super::QueryBuilder).

use crate::error::QueryError;
use crate::types::{Chart, PackRow, SongRow, TimeSignature};

use super::builder::{PACK_COLUMNS, SONG_COLUMNS};

/// Positional access to a single result row.
///
/// Each getter returns `Ok(None)` for SQL `NULL` and `Err` with a driver
/// message when the value has an unexpected type.
pub trait RowSource {
    /// Reads a text column.
    fn text(&self, index: usize) -> Result<Option<String>, String>;

    /// Reads a 32-bit integer column.
    fn integer(&self, index: usize) -> Result<Option<i32>, String>;

    /// Reads a floating point column.
    fn float(&self, index: usize) -> Result<Option<f64>, String>;
}

struct Scanner<'a, R: RowSource> {
    row: &'a R,
    backend_name: &'a str,
}

impl<R: RowSource> Scanner<'_, R> {
    fn column_name(index: usize) -> &'static str {
        SONG_COLUMNS
            .iter()
            .chain(PACK_COLUMNS.iter())
            .nth(index)
            .copied()
            .unwrap_or("unknown")
    }

    fn error(&self, index: usize, message: impl Into<String>) -> QueryError {
        QueryError::Scan {
            backend_name: self.backend_name.to_string(),
            column: Self::column_name(index).to_string(),
            message: message.into(),
        }
    }

    /// Identifier columns must not be NULL.
    fn id(&self, index: usize) -> Result<String, QueryError> {
        self.row
            .text(index)
            .map_err(|e| self.error(index, e))?
            .ok_or_else(|| self.error(index, "unexpected NULL"))
    }

    fn text(&self, index: usize) -> Result<String, QueryError> {
        Ok(self
            .row
            .text(index)
            .map_err(|e| self.error(index, e))?
            .unwrap_or_default())
    }

    fn integer(&self, index: usize) -> Result<i32, QueryError> {
        Ok(self
            .row
            .integer(index)
            .map_err(|e| self.error(index, e))?
            .unwrap_or_default())
    }

    fn float(&self, index: usize) -> Result<f64, QueryError> {
        Ok(self
            .row
            .float(index)
            .map_err(|e| self.error(index, e))?
            .unwrap_or_default())
    }
}

/// Scans the song columns of a row.
pub fn scan_song_row<R: RowSource>(row: &R, backend_name: &str) -> Result<SongRow, QueryError> {
    let s = Scanner { row, backend_name };

    Ok(SongRow {
        song_id: s.id(0)?,
        title: s.text(1)?,
        artist: s.text(2)?,
        banner_path: s.text(3)?,
        music_path: s.text(4)?,
        song_dir_path: s.text(5)?,
        file_extension: s.text(6)?,
        bpm: s.float(7)?,
        time_signature: TimeSignature {
            numerator: s.integer(8)?,
            denominator: s.integer(9)?,
        },
        chart: Chart {
            chart_id: s.id(10)?,
            name: s.text(11)?,
            steps_type: s.text(12)?,
            description: s.text(13)?,
            chart_style: s.text(14)?,
            difficulty: s.text(15)?,
            meter: s.integer(16)?,
            credit: s.text(17)?,
            stops_count: s.integer(18)?,
            delays_count: s.integer(19)?,
            warps_count: s.integer(20)?,
            scrolls_count: s.integer(21)?,
            fakes_count: s.integer(22)?,
            speeds_count: s.integer(23)?,
            stream: s.float(24)?,
            voltage: s.float(25)?,
            air: s.float(26)?,
            freeze: s.float(27)?,
            chaos: s.float(28)?,
        },
        pack_id: s.id(29)?,
        pack_name: s.text(30)?,
    })
}

/// Scans a row of the pack statement.
pub fn scan_pack_row<R: RowSource>(row: &R, backend_name: &str) -> Result<PackRow, QueryError> {
    let song = scan_song_row(row, backend_name)?;
    let s = Scanner { row, backend_name };
    let base = SONG_COLUMNS.len();

    Ok(PackRow {
        pack_id: song.pack_id.clone(),
        pack_name: song.pack_name.clone(),
        download_link: s.text(base)?,
        pack_banner_path: s.text(base + 1)?,
        song,
    })
}
