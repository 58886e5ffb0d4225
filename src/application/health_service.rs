// Health service - Liveness and readiness reporting
use async_trait::async_trait;
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// Outcome of one dependency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub status: HealthStatus,
    pub message: String,
}

impl CheckResult {
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
            message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Error,
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait HealthCheck: Send + Sync {
    fn name(&self) -> &str;

    async fn check(&self) -> CheckResult;
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub environment: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<CheckReport>,
}

#[derive(Clone)]
pub struct HealthService {
    environment: String,
    checks: Vec<Arc<dyn HealthCheck>>,
}

impl HealthService {
    pub fn new(environment: String, checks: Vec<Arc<dyn HealthCheck>>) -> Self {
        Self {
            environment,
            checks,
        }
    }

    /// The process is up; dependencies are not consulted.
    pub fn liveness(&self) -> HealthReport {
        HealthReport {
            status: HealthStatus::Ok,
            environment: self.environment.clone(),
            checks: Vec::new(),
        }
    }

    /// Run every registered check concurrently.
    pub async fn readiness(&self) -> HealthReport {
        let results = join_all(self.checks.iter().map(|c| c.check())).await;

        let checks: Vec<CheckReport> = self
            .checks
            .iter()
            .zip(results)
            .map(|(check, result)| {
                if result.status == HealthStatus::Error {
                    tracing::warn!(check = check.name(), message = %result.message, "Health check failed");
                }
                CheckReport {
                    name: check.name().to_string(),
                    status: result.status,
                    message: result.message,
                }
            })
            .collect();

        let status = if checks.iter().all(|c| c.status == HealthStatus::Ok) {
            HealthStatus::Ok
        } else {
            HealthStatus::Error
        };

        HealthReport {
            status,
            environment: self.environment.clone(),
            checks,
        }
    }
}
