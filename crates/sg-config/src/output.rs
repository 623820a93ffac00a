//! Output configuration for the inspection commands.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Format names accepted by `output.default_format`.
pub const FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl OutputConfig {
    /// Check that `default_format` names a known format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for anything outside [`FORMATS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if FORMATS.contains(&self.default_format.as_str()) {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "output.default_format".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                self.default_format,
                FORMATS.join(", ")
            ),
        })
    }
}
