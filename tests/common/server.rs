//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own dataset file. The model is
//! built through the real loader, a dataset that fails to load leaves the
//! server without a model just like at startup.

use super::constants::*;
use super::fixtures::{create_test_dataset, TRACKS_CSV};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tracks_recommender::server::{make_app, GuardedModel, RequestsLoggingLevel, ServerConfig};
use tracks_recommender::load_model;

/// Test server instance with an isolated dataset
///
/// When dropped, the server gracefully shuts down and the dataset is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Whether the dataset produced a model
    pub model_available: bool,

    _temp_dataset_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server over the default dataset
    pub async fn spawn() -> Self {
        Self::spawn_with_dataset(TRACKS_CSV).await
    }

    /// Spawns a server over `csv`, on a random port
    ///
    /// # Panics
    ///
    /// Panics if the dataset can't be written, the port can't be bound or
    /// the server doesn't become ready within the timeout.
    pub async fn spawn_with_dataset(csv: &str) -> Self {
        let (temp_dataset_dir, dataset_path) =
            create_test_dataset(csv).expect("Failed to create test dataset");

        let model: GuardedModel = load_model(&dataset_path).ok().map(Arc::new);
        let model_available = model.is_some();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            ..Default::default()
        };

        let app = make_app(config, model).expect("Failed to build app");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            model_available,
            _temp_dataset_dir: temp_dataset_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the / endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
