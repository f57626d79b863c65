use axum::extract::FromRef;

use crate::catalog::TrackModel;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// `None` when the dataset failed to load; it stays that way for the life of
/// the process.
pub type GuardedModel = Option<Arc<TrackModel>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub model: GuardedModel,
}

impl ServerState {
    pub fn new(config: ServerConfig, model: GuardedModel) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            model,
        }
    }
}

impl FromRef<ServerState> for GuardedModel {
    fn from_ref(input: &ServerState) -> Self {
        input.model.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
