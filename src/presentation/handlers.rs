// HTTP request handlers
use crate::application::health_service::HealthStatus;
use crate::domain::tile::TileCount;
use crate::infrastructure::http_response::html_response;
use crate::presentation::app_state::AppState;
use crate::presentation::views::{IndexView, TilesView};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TilesQuery {
    pub count: Option<String>,
}

/// Index page; tiles are loaded afterwards from `/tiles`
pub async fn index() -> impl IntoResponse {
    html_response(&IndexView::new(TileCount::default().get()))
}

/// Render the instance tiles fragment
///
/// An unparsable query string is treated like a missing `count`.
pub async fn tiles(
    query: Option<Query<TilesQuery>>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let raw = query.and_then(|Query(q)| q.count);
    let count = TileCount::from_param(raw.as_deref());
    let tiles = state.tile_service.build_tiles(count).await;
    html_response(&TilesView { tiles })
}

/// Liveness check
pub async fn health_live(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.health_service.liveness())
}

/// Readiness check; 503 when any dependency check fails
pub async fn health_ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let report = state.health_service.readiness().await;
    let status = match report.status {
        HealthStatus::Ok => StatusCode::OK,
        HealthStatus::Error => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(report))
}
