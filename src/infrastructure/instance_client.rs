// HTTP client for the backend instance-info endpoint
use crate::application::instance_source::{FetchError, InstanceSource};
use crate::domain::instance::InstanceInfo;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(30);
const POOL_MAX_IDLE_PER_HOST: usize = 2;

#[derive(Debug, Clone)]
pub struct HttpInstanceClient {
    client: reqwest::Client,
    instance_url: String,
    request_timeout: Duration,
}

impl HttpInstanceClient {
    pub fn new(instance_url: String) -> Result<Self> {
        Self::with_request_timeout(instance_url, REQUEST_TIMEOUT)
    }

    /// Client whose per-call deadline is `request_timeout` instead of the default 3s.
    pub fn with_request_timeout(instance_url: String, request_timeout: Duration) -> Result<Self> {
        // The backend is a single host, so the pool stays small.
        let client = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .build()
            .context("Failed to build instance HTTP client")?;

        Ok(Self {
            client,
            instance_url,
            request_timeout,
        })
    }

    async fn request(&self) -> Result<InstanceInfo, FetchError> {
        let response = self
            .client
            .get(&self.instance_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FetchError::Request)?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(response.status()));
        }

        response.json::<InstanceInfo>().await.map_err(FetchError::Decode)
    }
}

#[async_trait]
impl InstanceSource for HttpInstanceClient {
    async fn fetch_instance(&self) -> Result<InstanceInfo, FetchError> {
        let result = match tokio::time::timeout(self.request_timeout, self.request()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        };

        if let Err(e) = &result {
            tracing::debug!(url = %self.instance_url, error = %e, "Instance info request failed");
        }
        result
    }
}
