//! # sg-config
//!
//! Layered configuration loading for statguide using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STATGUIDE_*` prefix, `__` as separator)
//! 2. Project-level `./.statguide.toml`
//! 3. User-level `<config_dir>/statguide/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STATGUIDE_SESSION__SHOW_BANNER` -> `session.show_banner`,
//! `STATGUIDE_OUTPUT__DEFAULT_FORMAT` -> `output.default_format`, etc.
//! `STATGUIDE_LOG` belongs to the log filter and is not a config key.
//!
//! Figment trims environment values, so a prompt that needs leading or
//! trailing whitespace (such as the default `"Your choice: "`) has to be set
//! in a TOML file.
//!
//! # Usage
//!
//! ```no_run
//! use sg_config::GuideConfig;
//!
//! let config = GuideConfig::load().expect("config");
//! if config.session.show_banner {
//!     println!("banner enabled");
//! }
//! ```

mod error;
mod output;
mod session;

pub use error::ConfigError;
pub use output::{FORMATS, OutputConfig};
pub use session::SessionConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment prefix for every config key.
pub const ENV_PREFIX: &str = "STATGUIDE_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_FILE: &str = ".statguide.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuideConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl GuideConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type, and [`ConfigError::InvalidValue`] when a
    /// value parses but is not allowed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`GuideConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]).split("__"))
    }

    /// Check values that deserialize fine but are not usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("statguide").join("config.toml"))
    }
}
