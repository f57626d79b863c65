//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per recommender endpoint. When routes or
//! query parameters change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /recommend with `song_title` as query parameter
    pub async fn recommend(&self, song_title: &str) -> Response {
        self.client
            .get(format!("{}/recommend", self.base_url))
            .query(&[("song_title", song_title)])
            .send()
            .await
            .expect("Recommend request failed")
    }

    /// GET /recommend without any query parameter
    pub async fn recommend_without_title(&self) -> Response {
        self.client
            .get(format!("{}/recommend", self.base_url))
            .send()
            .await
            .expect("Recommend request failed")
    }

    /// GET /mood with `mood` as query parameter
    pub async fn mood(&self, mood: &str) -> Response {
        self.client
            .get(format!("{}/mood", self.base_url))
            .query(&[("mood", mood)])
            .send()
            .await
            .expect("Mood request failed")
    }

    /// GET /mood without any query parameter
    pub async fn mood_without_parameter(&self) -> Response {
        self.client
            .get(format!("{}/mood", self.base_url))
            .send()
            .await
            .expect("Mood request failed")
    }
}
