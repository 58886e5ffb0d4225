// Domain layer - Core models with no I/O
pub mod instance;
pub mod palette;
pub mod tile;
