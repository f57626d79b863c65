use super::load::TrackTableError;
use super::scaling::MinMaxScaler;
use super::track::{FeatureVector, ScaledTrack, Track, FEATURES_COUNT};

/// The raw tracks and their min-max scaled counterpart, aligned by index.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct TrackModel {
    tracks: Vec<Track>,
    scaled: Vec<ScaledTrack>,
    problems_count: usize,
}

impl TrackModel {
    pub fn build(tracks: Vec<Track>) -> Result<TrackModel, TrackTableError> {
        let vectors: Vec<FeatureVector> = tracks.iter().map(|t| t.features.to_vector()).collect();

        let mut feature_scalers = Vec::with_capacity(FEATURES_COUNT);
        for column in 0..FEATURES_COUNT {
            let scaler = MinMaxScaler::fit(vectors.iter().map(|v| v[column]))
                .ok_or(TrackTableError::Empty)?;
            feature_scalers.push(scaler);
        }
        let popularity_scaler = MinMaxScaler::fit(tracks.iter().map(|t| t.popularity as f64))
            .ok_or(TrackTableError::Empty)?;

        let scaled = tracks
            .iter()
            .zip(vectors.iter())
            .map(|(track, vector)| {
                let mut features = [0.0; FEATURES_COUNT];
                for (column, value) in features.iter_mut().enumerate() {
                    *value = feature_scalers[column].transform(vector[column]);
                }
                ScaledTrack {
                    features,
                    popularity: popularity_scaler.transform(track.popularity as f64),
                }
            })
            .collect();

        Ok(TrackModel {
            tracks,
            scaled,
            problems_count: 0,
        })
    }

    pub(super) fn with_problems_count(mut self, problems_count: usize) -> TrackModel {
        self.problems_count = problems_count;
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn scaled(&self) -> &[ScaledTrack] {
        &self.scaled
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of rows skipped as malformed while loading.
    pub fn problems_count(&self) -> usize {
        self.problems_count
    }
}
