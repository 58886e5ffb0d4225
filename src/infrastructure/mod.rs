// Infrastructure layer - External dependencies and adapters
pub mod backend_health;
pub mod config;
pub mod http_response;
pub mod instance_client;
pub mod logging;
