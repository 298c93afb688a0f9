//! Axum extractors for catalog requests.

pub mod search_filters;

pub use search_filters::SearchQuery;
