// Application state for HTTP handlers
use crate::application::health_service::HealthService;
use crate::application::tile_service::TileService;

#[derive(Clone)]
pub struct AppState {
    pub tile_service: TileService,
    pub health_service: HealthService,
}
