use crate::catalog::{AudioFeatures, Track};
use serde::Serialize;

/// Swaps the single quotes of a list-like artists literal for double quotes,
/// so that `['A', 'B']` reads as `["A", "B"]`. The text is not re-parsed,
/// apostrophes inside names are swapped as well.
pub fn requote_artists(artists: &str) -> String {
    artists.replace('\'', "\"")
}

/// Entry of a song-based recommendation.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct TrackSummary {
    pub name: String,
    pub artists: String,
    pub popularity: u32,
}

impl From<&Track> for TrackSummary {
    fn from(track: &Track) -> Self {
        TrackSummary {
            name: track.name.clone(),
            artists: requote_artists(&track.artists),
            popularity: track.popularity,
        }
    }
}

/// Entry of a mood-based recommendation: the whole record.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct TrackDetails {
    pub name: String,
    pub artists: String,
    pub id: String,
    pub popularity: u32,
    #[serde(flatten)]
    pub features: AudioFeatures,
}

impl From<&Track> for TrackDetails {
    fn from(track: &Track) -> Self {
        TrackDetails {
            name: track.name.clone(),
            artists: requote_artists(&track.artists),
            id: track.id.clone(),
            popularity: track.popularity,
            features: track.features,
        }
    }
}
