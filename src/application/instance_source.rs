// Source trait for backend instance data
use crate::domain::instance::InstanceInfo;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Why a single instance lookup failed. Callers treat every variant alike.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch instance info: {0}")]
    Request(#[source] reqwest::Error),

    #[error("instance info request timed out")]
    Timeout,

    #[error("unexpected status code from instance API: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait InstanceSource: Send + Sync {
    /// Fetch the status of whichever backend instance answers this call
    async fn fetch_instance(&self) -> Result<InstanceInfo, FetchError>;
}
