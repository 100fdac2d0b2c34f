//! Layered configuration for the `najia` CLI, loaded with figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`NAJIA_*`, `__` separates sections)
//! 2. Project-level `.najia/config.toml`
//! 3. User-level `<config dir>/najia/config.toml`
//! 4. Built-in defaults
//!
//! `NAJIA_GENERAL__OUTPUT=json` maps to `general.output`.

mod error;
mod general;

pub use error::ConfigError;
pub use general::{GeneralConfig, OutputFormat, UTC_OFFSET_RANGE};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".najia/config.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "NAJIA_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NajiaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NajiaConfig {
    /// Load and validate configuration from every source.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Extract and validate from a prepared figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the provider chain.
    pub fn figment() -> Figment {
        Self::layered(Self::global_config_path().as_deref())
    }

    /// Provider chain with an explicit user-global file (`None` skips that layer).
    pub fn layered(global_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("najia").join("config.toml"))
    }
}
