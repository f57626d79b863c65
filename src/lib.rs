//! Tracks Recommender Library
//!
//! Content-based music recommendations over a CSV table of tracks with audio
//! features, served over HTTP.

pub mod catalog;
pub mod config;
pub mod recommend;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{load_model, Track, TrackModel, TrackTableError};
pub use recommend::{recommend_by_mood, recommend_by_song, Mood, RecommendError};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
