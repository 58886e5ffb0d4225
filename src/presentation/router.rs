// Router wiring - Builds the whole application from configuration
use crate::application::health_service::{HealthCheck, HealthService};
use crate::application::tile_service::TileService;
use crate::domain::palette::Palette;
use crate::infrastructure::backend_health::BackendHealthCheck;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::instance_client::HttpInstanceClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_live, health_ready, index, tiles};
use crate::presentation::trace_context::TraceContextSpan;
use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Wire services and routes for `config`.
pub fn setup_router(config: &AppConfig) -> anyhow::Result<Router> {
    let palette = Palette::new(config.tile_colors.clone()).context("Invalid tile_colors")?;

    let instance_client = Arc::new(HttpInstanceClient::new(config.backend_url.clone())?);
    let backend_check: Arc<dyn HealthCheck> = Arc::new(
        BackendHealthCheck::new(&config.backend_url)
            .context("Failed to create backend health checker")?,
    );

    let state = Arc::new(AppState {
        tile_service: TileService::new(instance_client, palette),
        health_service: HealthService::new(config.environment.clone(), vec![backend_check]),
    });

    Ok(build_router(state))
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let health = Router::new()
        .route("/live", get(health_live))
        .route("/ready", get(health_ready));

    // Health endpoints stay out of the request log.
    let pages = Router::new()
        .route("/", get(index))
        .route("/tiles", get(tiles))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(TraceContextSpan)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Router::new()
        .nest("/health", health)
        .merge(pages)
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
