use super::{RecommendError, TrackDetails};
use crate::catalog::{AudioFeatures, TrackModel};
use std::str::FromStr;

pub const MOOD_RECOMMENDATIONS_COUNT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
    Chill,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Chill, Mood::Energetic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Chill => "chill",
            Mood::Energetic => "energetic",
        }
    }

    /// Evaluated on raw, unscaled values. All bounds are exclusive.
    pub fn matches(&self, features: &AudioFeatures) -> bool {
        let energy = features.energy;
        let valence = features.valence;
        match self {
            Mood::Happy => energy > 0.7 && valence > 0.7,
            Mood::Sad => energy < 0.4 && valence < 0.3,
            Mood::Chill => energy < 0.5 && valence > 0.4 && valence < 0.7,
            Mood::Energetic => energy > 0.8 && valence > 0.5,
        }
    }
}

impl FromStr for Mood {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| RecommendError::InvalidMood(s.to_owned()))
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The most popular tracks matching `mood`, at most fifteen.
pub fn recommend_by_mood(
    model: &TrackModel,
    mood: &str,
) -> Result<Vec<TrackDetails>, RecommendError> {
    if mood.is_empty() {
        return Err(RecommendError::MissingParameter("mood"));
    }
    let mood = Mood::from_str(mood)?;

    let mut matching: Vec<_> = model
        .tracks()
        .iter()
        .filter(|track| mood.matches(&track.features))
        .collect();
    matching.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    matching.truncate(MOOD_RECOMMENDATIONS_COUNT);

    Ok(matching.into_iter().map(TrackDetails::from).collect())
}
