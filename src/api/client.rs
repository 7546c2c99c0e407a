//! Stats API Client
//!
//! A reqwest-backed client for the statistics backend serving the dashboard
//! dataset.

use crate::api::StatsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::stats_api;
use crate::environment::Environment;
use crate::stats::BlockStats;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("blockstats/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            // No request timeout: the dataset load is a single best-effort
            // request, with no retry or cancellation on top of it.
            client: ClientBuilder::new()
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        serde_json::from_slice(&response_bytes).map_err(ApiError::Decode)
    }
}

#[async_trait::async_trait]
impl StatsApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn block_stats(&self) -> Result<BlockStats, ApiError> {
        self.get_request(stats_api::BLOCK_STATS_PATH).await
    }
}
