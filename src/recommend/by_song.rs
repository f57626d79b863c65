use super::similarity::{descending, similarities};
use super::{RecommendError, TrackSummary};
use crate::catalog::TrackModel;

/// Most similar tracks that make it to the hybrid re-ranking.
pub const CANDIDATE_POOL_SIZE: usize = 20;
pub const SONG_RECOMMENDATIONS_COUNT: usize = 10;
pub const SIMILARITY_WEIGHT: f64 = 0.6;
pub const POPULARITY_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredTrack {
    pub index: usize,
    pub similarity: f64,
    pub hybrid_score: f64,
}

/// Index of the most popular track whose name contains `title`, case
/// insensitive. The first one in table order wins a tie.
pub fn find_song(model: &TrackModel, title: &str) -> Option<usize> {
    let needle = title.to_lowercase();
    let mut best: Option<(usize, u32)> = None;
    for (index, track) in model.tracks().iter().enumerate() {
        if !track.name.to_lowercase().contains(&needle) {
            continue;
        }
        match best {
            Some((_, popularity)) if popularity >= track.popularity => {}
            _ => best = Some((index, track.popularity)),
        }
    }
    best.map(|(index, _)| index)
}

/// Tracks most similar to the one at `index`, ranked by hybrid score.
pub fn rank_similar(model: &TrackModel, index: usize) -> Vec<ScoredTrack> {
    let scaled = model.scaled();
    let query = scaled[index].features;
    let sims = similarities(&query, scaled);

    let mut candidates: Vec<(usize, f64)> = sims
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .collect();
    candidates.sort_by(|a, b| descending(a.1, b.1));
    candidates.truncate(CANDIDATE_POOL_SIZE);

    let mut scored: Vec<ScoredTrack> = candidates
        .into_iter()
        .map(|(i, similarity)| ScoredTrack {
            index: i,
            similarity,
            hybrid_score: SIMILARITY_WEIGHT * similarity + POPULARITY_WEIGHT * scaled[i].popularity,
        })
        .collect();
    scored.sort_by(|a, b| descending(a.hybrid_score, b.hybrid_score));
    scored.truncate(SONG_RECOMMENDATIONS_COUNT);
    scored
}

/// The matched song followed by up to ten recommendations.
pub fn recommend_by_song(
    model: &TrackModel,
    title: &str,
) -> Result<Vec<TrackSummary>, RecommendError> {
    if title.is_empty() {
        return Err(RecommendError::MissingParameter("song_title"));
    }

    let index =
        find_song(model, title).ok_or_else(|| RecommendError::NotFound(title.to_owned()))?;
    let tracks = model.tracks();

    let mut result = Vec::with_capacity(SONG_RECOMMENDATIONS_COUNT + 1);
    result.push(TrackSummary::from(&tracks[index]));
    result.extend(
        rank_similar(model, index)
            .iter()
            .map(|scored| TrackSummary::from(&tracks[scored.index])),
    );
    Ok(result)
}
