//! # atl-config
//!
//! Layered configuration loading for Atelier using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Explicit overrides (e.g. the CLI's `--api-url`)
//! 2. Environment variables (`ATELIER_*` prefix, `__` as separator)
//! 3. Project-level `.atelier/config.toml`
//! 4. User-level `~/.config/atelier/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ATELIER_API__BASE_URL` -> `api.base_url`,
//! `ATELIER_GENERAL__CONFIRM_DELETES` -> `general.confirm_deletes`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use atl_config::AtelierConfig;
//!
//! let config = AtelierConfig::load_with_dotenv(None).expect("config");
//! println!("records API: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AtelierConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AtelierConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or the API base URL
    /// is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Read `.env` into the process environment, then load as
    /// [`Self::load_with_api_url`] does.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(api_url: Option<&str>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_with_api_url(api_url)
    }

    /// Load configuration, then apply an explicit API base URL on top of
    /// every other source.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_api_url(api_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut figment = Self::figment();
        if let Some(url) = api_url {
            figment = figment.merge(("api.base_url", url));
        }
        Self::extract(figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".atelier/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment.merge(Env::prefixed("ATELIER_").split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("atelier").join("config.toml"))
    }
}
