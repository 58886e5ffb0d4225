use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file path must be absolute: {0}")]
    PathNotAbsolute(PathBuf),

    #[error("failed to load config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("backend_url must be configured in the config file")]
    BackendUrlRequired,

    #[error("environment must be configured in the config file")]
    EnvironmentRequired,

    #[error("tile_colors must be configured in the config file")]
    TileColorsRequired,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Instance-info endpoint of the backend
    #[serde(default)]
    pub backend_url: String,
    /// Environment name (local, dev, staging, prod)
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub tile_colors: Vec<String>,
    #[serde(default)]
    pub log_config: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub add_source: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            add_source: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Load and validate the YAML config at `path`.
///
/// Scalar keys can be overridden from the environment, e.g.
/// `FRONTEND__ENVIRONMENT=staging` or `FRONTEND__LOG_CONFIG__LEVEL=debug`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.is_absolute() {
        return Err(ConfigError::PathNotAbsolute(path.to_path_buf()));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("FRONTEND")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let cfg: AppConfig = settings.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend_url.trim().is_empty() {
            return Err(ConfigError::BackendUrlRequired);
        }
        if self.environment.trim().is_empty() {
            return Err(ConfigError::EnvironmentRequired);
        }
        if self.tile_colors.is_empty() {
            return Err(ConfigError::TileColorsRequired);
        }
        Ok(())
    }
}
