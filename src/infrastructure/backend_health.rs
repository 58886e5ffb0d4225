// Readiness check against the backend service
use crate::application::health_service::{CheckResult, HealthCheck};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);
const READY_PATH: &str = "/health/ready";

#[derive(Debug, Clone)]
pub struct BackendHealthCheck {
    client: reqwest::Client,
    health_url: String,
}

impl BackendHealthCheck {
    /// Build a checker for the backend that serves `backend_url`.
    pub fn new(backend_url: &str) -> Result<Self> {
        let health_url = derive_health_url(backend_url)?;
        let client = reqwest::Client::builder()
            .timeout(HEALTH_CHECK_TIMEOUT)
            .build()
            .context("Failed to build health check HTTP client")?;

        Ok(Self { client, health_url })
    }
}

/// `<scheme>://<host[:port]>/health/ready` for the given backend URL.
pub fn derive_health_url(backend_url: &str) -> Result<String> {
    let parsed = Url::parse(backend_url).context("Failed to parse backend URL")?;
    let host = parsed
        .host_str()
        .with_context(|| format!("Backend URL has no host: {}", backend_url))?;

    let authority = match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    Ok(format!("{}://{}{}", parsed.scheme(), authority, READY_PATH))
}

#[async_trait]
impl HealthCheck for BackendHealthCheck {
    fn name(&self) -> &str {
        "backend"
    }

    async fn check(&self) -> CheckResult {
        let response = match self.client.get(&self.health_url).send().await {
            Ok(response) => response,
            Err(e) => return CheckResult::error(format!("failed to reach backend: {}", e)),
        };

        if response.status() != StatusCode::OK {
            return CheckResult::error(format!("backend returned status {}", response.status().as_u16()));
        }

        CheckResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::health_service::HealthStatus;
    use crate::test_support::{MockBackend, unreachable_url};

    #[test]
    fn test_derive_health_url() {
        assert_eq!(
            derive_health_url("http://backend:8080/instance/info").unwrap(),
            "http://backend:8080/health/ready"
        );
        assert_eq!(
            derive_health_url("https://api.example.com/v1/instance/info?x=1").unwrap(),
            "https://api.example.com/health/ready"
        );
        assert_eq!(
            derive_health_url("http://[::1]:9000/instance/info").unwrap(),
            "http://[::1]:9000/health/ready"
        );
    }

    #[test]
    fn test_invalid_backend_url() {
        assert!(derive_health_url("not a url").is_err());
        assert!(BackendHealthCheck::new("").is_err());
    }

    #[tokio::test]
    async fn test_check_ok() {
        let backend = MockBackend::start("1.0.0").await;
        let check = BackendHealthCheck::new(&backend.instance_url()).unwrap();

        assert_eq!(check.name(), "backend");
        assert_eq!(check.check().await, CheckResult::ok());
    }

    #[tokio::test]
    async fn test_check_unhealthy_status() {
        let backend = MockBackend::start_with_status(StatusCode::SERVICE_UNAVAILABLE).await;
        let check = BackendHealthCheck::new(&backend.instance_url()).unwrap();

        let result = check.check().await;
        assert_eq!(result.status, HealthStatus::Error);
        assert_eq!(result.message, "backend returned status 503");
    }

    #[tokio::test]
    async fn test_check_unreachable() {
        let check = BackendHealthCheck::new(&unreachable_url().await).unwrap();

        let result = check.check().await;
        assert_eq!(result.status, HealthStatus::Error);
        assert!(result.message.starts_with("failed to reach backend"));
    }
}
