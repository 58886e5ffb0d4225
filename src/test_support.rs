// Shared fixtures for HTTP tests: a scripted backend and a local server runner
use crate::domain::instance::InstanceInfo;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

enum Behavior {
    Instance { hostname: String, version: String },
    Status(StatusCode),
    Body(&'static str),
    Delay(Duration),
}

/// Axum server bound to an ephemeral local port, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn serve(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Self { addr, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Stand-in for the backend service.
pub struct MockBackend {
    server: TestServer,
}

impl MockBackend {
    pub async fn start(version: &str) -> Self {
        Self::start_instance("test-host", version).await
    }

    pub async fn start_instance(hostname: &str, version: &str) -> Self {
        Self::spawn(Behavior::Instance {
            hostname: hostname.to_string(),
            version: version.to_string(),
        })
        .await
    }

    /// Every endpoint answers with `status`.
    pub async fn start_with_status(status: StatusCode) -> Self {
        Self::spawn(Behavior::Status(status)).await
    }

    /// Instance endpoint answers 200 with a raw JSON body.
    pub async fn start_with_body(body: &'static str) -> Self {
        Self::spawn(Behavior::Body(body)).await
    }

    /// Instance endpoint answers after `delay`.
    pub async fn start_with_delay(delay: Duration) -> Self {
        Self::spawn(Behavior::Delay(delay)).await
    }

    async fn spawn(behavior: Behavior) -> Self {
        let router = Router::new()
            .route("/instance/info", get(instance_info))
            .route("/health/ready", get(health_ready))
            .with_state(Arc::new(behavior));
        Self {
            server: TestServer::serve(router).await,
        }
    }

    pub fn instance_url(&self) -> String {
        self.server.url("/instance/info")
    }
}

/// URL on a local port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/instance/info", addr)
}

fn sample_instance(hostname: &str, version: &str) -> InstanceInfo {
    InstanceInfo {
        version: version.to_string(),
        hostname: hostname.to_string(),
        uptime: "1m30s".to_string(),
        runtime_version: "go1.25.5".to_string(),
        timestamp: Utc::now(),
    }
}

async fn instance_info(State(behavior): State<Arc<Behavior>>) -> Response {
    match behavior.as_ref() {
        Behavior::Instance { hostname, version } => Json(sample_instance(hostname, version)).into_response(),
        Behavior::Status(status) => (*status, "unavailable").into_response(),
        Behavior::Body(body) => ([(header::CONTENT_TYPE, "application/json")], *body).into_response(),
        Behavior::Delay(delay) => {
            tokio::time::sleep(*delay).await;
            Json(sample_instance("test-host", "1.0.0")).into_response()
        }
    }
}

async fn health_ready(State(behavior): State<Arc<Behavior>>) -> Response {
    match behavior.as_ref() {
        Behavior::Status(status) => (*status, Json(serde_json::json!({"status": "error"}))).into_response(),
        _ => Json(serde_json::json!({"status": "ok"})).into_response(),
    }
}
