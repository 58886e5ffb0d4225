// Instance domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNAVAILABLE_VERSION: &str = "error";
pub const UNAVAILABLE_HOSTNAME: &str = "failed to fetch";
const NOT_AVAILABLE: &str = "N/A";

/// Status reported by one backend instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub version: String,
    pub hostname: String,
    pub uptime: String,
    #[serde(rename = "go_version")]
    pub runtime_version: String,
    pub timestamp: DateTime<Utc>,
}

impl InstanceInfo {
    /// Placeholder shown in place of an instance the backend did not answer for.
    pub fn unavailable() -> Self {
        Self {
            version: UNAVAILABLE_VERSION.to_string(),
            hostname: UNAVAILABLE_HOSTNAME.to_string(),
            uptime: NOT_AVAILABLE.to_string(),
            runtime_version: NOT_AVAILABLE.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.hostname == UNAVAILABLE_HOSTNAME && self.version == UNAVAILABLE_VERSION
    }

    /// Key used to pick the tile color: `hostname|version`.
    pub fn color_key(&self) -> String {
        format!("{}|{}", self.hostname, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_payload() {
        let body = r#"{
            "version": "1.4.2",
            "hostname": "backend-7f9c",
            "uptime": "3h12m5.25s",
            "go_version": "go1.25.5",
            "timestamp": "2025-11-02T10:15:30.123456789Z"
        }"#;

        let info: InstanceInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.version, "1.4.2");
        assert_eq!(info.hostname, "backend-7f9c");
        assert_eq!(info.uptime, "3h12m5.25s");
        assert_eq!(info.runtime_version, "go1.25.5");
        assert_eq!(info.timestamp.timestamp_subsec_nanos(), 123_456_789);
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let body = r#"{"version": "1.0.0", "hostname": "h"}"#;
        assert!(serde_json::from_str::<InstanceInfo>(body).is_err());
    }

    #[test]
    fn test_unavailable_placeholder() {
        let info = InstanceInfo::unavailable();
        assert_eq!(info.version, "error");
        assert_eq!(info.hostname, "failed to fetch");
        assert_eq!(info.uptime, "N/A");
        assert_eq!(info.runtime_version, "N/A");
        assert!(info.is_unavailable());
        assert_eq!(info.color_key(), "failed to fetch|error");
    }
}
