//! Song-based and mood-based recommendations over a [`TrackModel`].
//!
//! [`TrackModel`]: crate::catalog::TrackModel

mod by_mood;
mod by_song;
mod error;
mod output;
mod similarity;

pub use by_mood::{recommend_by_mood, Mood, MOOD_RECOMMENDATIONS_COUNT};
pub use by_song::{find_song, rank_similar, recommend_by_song, ScoredTrack};
pub use by_song::{CANDIDATE_POOL_SIZE, POPULARITY_WEIGHT, SIMILARITY_WEIGHT, SONG_RECOMMENDATIONS_COUNT};
pub use error::RecommendError;
pub use output::{requote_artists, TrackDetails, TrackSummary};
pub use similarity::{cosine_similarity, similarities};
