use crate::catalog::{FeatureVector, ScaledTrack};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Cosine similarity of two feature vectors. A zero-magnitude vector has
/// similarity 0.0 with anything, itself included.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Similarity of `query` against every scaled track, in table order.
pub fn similarities(query: &FeatureVector, scaled: &[ScaledTrack]) -> Vec<f64> {
    scaled
        .par_iter()
        .map(|s| cosine_similarity(query, &s.features))
        .collect()
}

/// Descending comparison for scores. Callers rely on the stable sort to keep
/// table order between equal scores.
pub(super) fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
