use serde::Serialize;

pub const FEATURES_COUNT: usize = 9;

/// Column names of the audio features, in feature-vector order.
pub const FEATURE_COLUMNS: [&str; FEATURES_COUNT] = [
    "acousticness",
    "danceability",
    "energy",
    "instrumentalness",
    "liveness",
    "loudness",
    "speechiness",
    "tempo",
    "valence",
];

pub type FeatureVector = [f64; FEATURES_COUNT];

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Default)]
pub struct AudioFeatures {
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    /// Decibels, usually negative.
    pub loudness: f64,
    pub speechiness: f64,
    /// Beats per minute.
    pub tempo: f64,
    pub valence: f64,
}

impl AudioFeatures {
    pub fn to_vector(&self) -> FeatureVector {
        [
            self.acousticness,
            self.danceability,
            self.energy,
            self.instrumentalness,
            self.liveness,
            self.loudness,
            self.speechiness,
            self.tempo,
            self.valence,
        ]
    }

    pub fn from_vector(v: FeatureVector) -> AudioFeatures {
        AudioFeatures {
            acousticness: v[0],
            danceability: v[1],
            energy: v[2],
            instrumentalness: v[3],
            liveness: v[4],
            loudness: v[5],
            speechiness: v[6],
            tempo: v[7],
            valence: v[8],
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Track {
    pub name: String,
    /// List-like literal kept as opaque text, e.g. `['Artist A', 'Artist B']`.
    pub artists: String,
    pub id: String,
    pub popularity: u32,
    #[serde(flatten)]
    pub features: AudioFeatures,
}

/// Normalized counterpart of a [`Track`], same index in the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledTrack {
    pub features: FeatureVector,
    pub popularity: f64,
}
