//! Core types for the catalog.
//!
//! - [`Song`], [`Pack`], [`Chart`] - entities returned to clients
//! - [`SongRow`], [`PackRow`] - single rows of the denormalized join
//! - [`SearchFilters`] - validated search options
//! - [`PageRequest`], [`SongPage`] - pagination
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use smdb_persistence::types::SearchFilters;
//!
//! let mut params = HashMap::new();
//! params.insert("meterMin".to_string(), "10".to_string());
//! params.insert("pageSize".to_string(), "500".to_string());
//!
//! let filters = SearchFilters::from_params(&params).unwrap();
//! assert_eq!(filters.meter_min, 10);
//! assert_eq!(filters.meter_max, 99);
//! assert_eq!(filters.page.page_size(), 100);
//! ```

mod filters;
mod models;
mod pagination;

pub use filters::{
    DEFAULT_BPM_MAX, DEFAULT_BPM_MIN, DEFAULT_METER_MAX, DEFAULT_METER_MIN, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE, SearchFilters,
};
pub use models::{Bpm, Chart, Pack, PackRow, PackSubmission, Song, SongRow, TimeSignature};
pub use pagination::{PageRequest, SongPage, page_count};
