/// Parser configuration
/// Limits applied while parsing type signatures, loaded from the environment

use std::env;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_MAX_DEPTH: usize = 64;
const MAX_DEPTH_CEILING: usize = 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed nesting of tuples and array suffixes.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("ABI_MAX_TYPE_DEPTH").unwrap_or_else(|_| DEFAULT_MAX_DEPTH.to_string());
        let config = Self::from_max_depth_str(&raw)?;

        info!("Parser configuration loaded: max_depth={}", config.max_depth);
        Ok(config)
    }

    fn from_max_depth_str(raw: &str) -> Result<Self, ConfigError> {
        let max_depth = raw.trim().parse::<usize>().map_err(|e| {
            ConfigError::InvalidConfig(format!("Invalid max type depth: {} ({})", raw, e))
        })?;

        if max_depth < 1 || max_depth > MAX_DEPTH_CEILING {
            return Err(ConfigError::InvalidConfig(format!(
                "Max type depth must be between 1 and {}",
                MAX_DEPTH_CEILING
            )));
        }

        Ok(Self { max_depth })
    }
}
