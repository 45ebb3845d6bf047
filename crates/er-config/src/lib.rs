//! # er-config
//!
//! Layered configuration loading for exitready using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EXITREADY_*` prefix, `__` as separator)
//! 2. Project-level `.exitready/config.toml`
//! 3. User-level `~/.config/exitready/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EXITREADY_GENERAL__ANCHOR_YEAR` -> `general.anchor_year`,
//! `EXITREADY_STORAGE__STATE_DIR` -> `storage.state_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use er_config::ExitReadyConfig;
//!
//! let config = ExitReadyConfig::load_with_dotenv().expect("config");
//! println!("anchor year: {}", config.general.resolved_anchor_year());
//! ```

mod error;
mod general;
mod questionnaire;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use questionnaire::QuestionnaireConfig;
pub use storage::StorageConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "EXITREADY_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExitReadyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl ExitReadyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary provider chain.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".exitready/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("exitready").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_builtin_questionnaire() {
        let config = ExitReadyConfig::default();
        assert_eq!(config.general.anchor_year, None);
        assert_eq!(config.questionnaire.custom_path(), None);
        assert!(config.storage.state_dir.is_empty());
    }

    #[test]
    fn defaults_survive_figment_roundtrip() {
        let config: ExitReadyConfig = Figment::from(Serialized::defaults(ExitReadyConfig::default()))
            .extract()
            .expect("should extract defaults");
        assert_eq!(config, ExitReadyConfig::default());
    }
}
