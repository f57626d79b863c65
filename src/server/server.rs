use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{error, info};

use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::metrics::metrics_handler;
use super::recommend::make_recommend_routes;
use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: &'static str,
    pub model_available: bool,
    pub tracks_count: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION"),
        model_available: state.model.is_some(),
        tracks_count: state.model.as_ref().map_or(0, |model| model.len()),
    };
    Json(stats)
}

pub fn make_app(config: ServerConfig, model: GuardedModel) -> Result<Router> {
    let state = ServerState::new(config.clone(), model);

    let home_router: Router = match &config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app: Router = home_router
        .merge(make_recommend_routes(state.clone()))
        .layer(cors)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, model: GuardedModel) -> Result<()> {
    let metrics_listener = tokio::net::TcpListener::bind((config.bind_address, config.metrics_port))
        .await
        .with_context(|| format!("Could not bind metrics port {}", config.metrics_port))?;
    let metrics_app = Router::new().route("/metrics", get(metrics_handler));
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            error!("Metrics server stopped: {}", err);
        }
    });

    let app = make_app(config.clone(), model)?;
    let listener = tokio::net::TcpListener::bind((config.bind_address, config.port))
        .await
        .with_context(|| format!("Could not bind port {}", config.port))?;

    info!(
        "Serving on {}:{}, metrics on port {}",
        config.bind_address, config.port, config.metrics_port
    );
    Ok(axum::serve(listener, app).await?)
}
