//! Recommendation API routes

use crate::catalog::TrackModel;
use crate::recommend::{recommend_by_mood, recommend_by_song, RecommendError};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use super::metrics::record_recommendation;
use super::state::{GuardedModel, ServerState};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecommendError::ModelUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            RecommendError::MissingParameter(_) | RecommendError::InvalidMood(_) => {
                StatusCode::BAD_REQUEST
            }
            RecommendError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Query string pairs in request order. Extracting pairs instead of a struct
/// keeps repeated keys from failing the request before the handler runs.
type QueryPairs = Vec<(String, String)>;

/// Value of the first occurrence of `key`, empty when absent.
fn first_param(pairs: QueryPairs, key: &str) -> String {
    pairs
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Runs `recommend` against the model, recording the outcome. The model
/// check comes first, so a missing model wins over a missing parameter.
fn serve_recommendation<T: Serialize>(
    kind: &'static str,
    model: &GuardedModel,
    recommend: impl FnOnce(&TrackModel) -> Result<Vec<T>, RecommendError>,
) -> Response {
    let start = Instant::now();
    let result = model
        .as_deref()
        .ok_or(RecommendError::ModelUnavailable)
        .and_then(recommend);

    let outcome = match &result {
        Ok(_) => "ok",
        Err(err) => err.kind(),
    };
    record_recommendation(kind, outcome, start.elapsed());

    match result {
        Ok(tracks) => Json(tracks).into_response(),
        Err(err) => {
            debug!("{} recommendation failed: {}", kind, err);
            err.into_response()
        }
    }
}

async fn get_song_recommendations(
    State(model): State<GuardedModel>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let title = first_param(pairs, "song_title");
    serve_recommendation("song", &model, |model| recommend_by_song(model, &title))
}

async fn get_mood_recommendations(
    State(model): State<GuardedModel>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let mood = first_param(pairs, "mood");
    serve_recommendation("mood", &model, |model| recommend_by_mood(model, &mood))
}

pub fn make_recommend_routes(state: ServerState) -> Router {
    Router::new()
        .route("/recommend", get(get_song_recommendations))
        .route("/mood", get(get_mood_recommendations))
        .with_state(state)
}
