//! Configuration loading and validation

pub mod models;

pub use models::AuthzConfig;

use crate::utils::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Authorization settings
    #[serde(default)]
    pub authz: AuthzConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Validate every configuration section
    pub fn validate(&self) -> Result<()> {
        self.authz.validate().map_err(EngineError::config)
    }
}
