use crate::infrastructure::config::LogConfig;
use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(format: &str) -> Result<Self> {
        match format.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Invalid log format: {} (expected text or json)", format),
        }
    }
}

/// Build the level filter; `RUST_LOG` takes precedence over the configured level.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level: LevelFilter = level
        .trim()
        .parse()
        .with_context(|| format!("Invalid log level: {}", level))?;
    Ok(EnvFilter::new(level.to_string()))
}

/// Install the global tracing subscriber.
pub fn init_tracing(cfg: &LogConfig) -> Result<()> {
    let format: LogFormat = cfg.format.parse()?;
    let filter = build_filter(&cfg.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(cfg.add_source)
        .with_line_number(cfg.add_source);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
