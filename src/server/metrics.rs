use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all recommender metrics
const PREFIX: &str = "tracks_recommender";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Recommendation Metrics
    pub static ref RECOMMENDATIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_recommendations_total"), "Total recommendation requests by kind and outcome"),
        &["kind", "outcome"]
    ).expect("Failed to create recommendations_total metric");

    pub static ref RECOMMENDATION_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_recommendation_duration_seconds"),
            "Time spent computing recommendations in seconds"
        )
        .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        &["kind"]
    ).expect("Failed to create recommendation_duration_seconds metric");

    // Dataset Metrics
    pub static ref DATASET_TRACKS: Gauge = Gauge::new(
        format!("{PREFIX}_dataset_tracks"),
        "Number of tracks in the loaded dataset"
    ).expect("Failed to create dataset_tracks metric");

    pub static ref DATASET_LOAD_PROBLEMS: Gauge = Gauge::new(
        format!("{PREFIX}_dataset_load_problems"),
        "Number of dataset rows skipped while loading"
    ).expect("Failed to create dataset_load_problems metric");

    pub static ref MODEL_AVAILABLE: Gauge = Gauge::new(
        format!("{PREFIX}_model_available"),
        "1 if the recommendation model is loaded, 0 otherwise"
    ).expect("Failed to create model_available metric");

    pub static ref PROCESS_MEMORY_BYTES: Gauge = Gauge::new(
        format!("{PREFIX}_process_memory_bytes"),
        "Process memory usage in bytes"
    ).expect("Failed to create process_memory_bytes metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Already registered errors are ignored, tests initialize more than once.
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(RECOMMENDATIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(RECOMMENDATION_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(DATASET_TRACKS.clone()));
    let _ = REGISTRY.register(Box::new(DATASET_LOAD_PROBLEMS.clone()));
    let _ = REGISTRY.register(Box::new(MODEL_AVAILABLE.clone()));
    let _ = REGISTRY.register(Box::new(PROCESS_MEMORY_BYTES.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Publish the state of the loaded dataset. `None` means no model is available.
pub fn set_dataset_metrics(loaded: Option<(usize, usize)>) {
    match loaded {
        Some((num_tracks, num_problems)) => {
            DATASET_TRACKS.set(num_tracks as f64);
            DATASET_LOAD_PROBLEMS.set(num_problems as f64);
            MODEL_AVAILABLE.set(1.0);
            tracing::info!(
                "Dataset metrics initialized: {} tracks, {} skipped rows",
                num_tracks,
                num_problems
            );
        }
        None => {
            DATASET_TRACKS.set(0.0);
            DATASET_LOAD_PROBLEMS.set(0.0);
            MODEL_AVAILABLE.set(0.0);
        }
    }
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record a recommendation request. `outcome` is "ok" or an error kind.
pub fn record_recommendation(kind: &str, outcome: &str, duration: Duration) {
    RECOMMENDATIONS_TOTAL
        .with_label_values(&[kind, outcome])
        .inc();

    RECOMMENDATION_DURATION_SECONDS
        .with_label_values(&[kind])
        .observe(duration.as_secs_f64());
}

/// Update process memory usage
pub fn update_memory_usage() {
    #[cfg(target_os = "linux")]
    {
        if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
            for line in status.lines() {
                if line.starts_with("VmRSS:") {
                    // kB
                    if let Some(kb_str) = line.split_whitespace().nth(1) {
                        if let Ok(kb) = kb_str.parse::<f64>() {
                            PROCESS_MEMORY_BYTES.set(kb * 1024.0);
                            return;
                        }
                    }
                }
            }
        }
    }
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    update_memory_usage();

    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_default();
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
