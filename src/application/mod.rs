// Application layer - Use cases over the domain
pub mod health_service;
pub mod instance_source;
pub mod tile_service;
