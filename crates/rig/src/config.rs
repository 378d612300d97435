//! Rig coefficients loaded from JSON.
//!
//! ```json
//! { "in_accel": 1.0, "damping": 0.1 }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RigConfig {
    #[serde(default = "default_in_accel")]
    pub in_accel: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
}

fn default_in_accel() -> f64 {
    1.0
}

fn default_damping() -> f64 {
    0.1
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            in_accel: default_in_accel(),
            damping: default_damping(),
        }
    }
}

impl RigConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or unknown keys,
    /// [`ConfigError::NonFinite`] for NaN or infinite coefficients.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file, see [`Self::from_json_str`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise the errors of
    /// [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(?path, ?config, "loaded rig config");
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ConfigError::NonFinite`] naming the first non-finite coefficient.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("in_accel", self.in_accel), ("damping", self.damping)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }
}
