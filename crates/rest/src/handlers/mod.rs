//! HTTP request handlers for the catalog API.
//!
//! - [`songs`] - Song search and song lookup
//! - [`packs`] - Pack lookup and pack submission
//! - [`health`] - Health check endpoints

pub mod health;
pub mod packs;
pub mod songs;

pub use health::{health_handler, liveness_handler};
pub use packs::{pack_handler, submit_pack_handler};
pub use songs::{search_songs_handler, song_handler};
