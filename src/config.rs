//! TOML configuration for the pipeline settings
//!
//! ```toml
//! [attitude]
//! scale = 1e-5
//!
//! [isolation]
//! gravity = 9.80665
//! gravity_sign = "subtract"
//! ```
//!
//! Missing tables and keys fall back to their defaults.

use std::path::Path;

use tracing::info;

use crate::error::ConfigError;
use crate::types::PipelineSettings;

impl PipelineSettings {
    /// Parse and validate settings from a TOML string
    ///
    /// # Example
    /// ```
    /// use attitude_isolator::{GravitySign, PipelineSettings};
    ///
    /// let settings = PipelineSettings::from_toml_str(
    ///     "[isolation]\ngravity = 1.0\ngravity_sign = \"add\"\n",
    /// )
    /// .unwrap();
    /// assert_eq!(settings.isolation.gravity, 1.0);
    /// assert_eq!(settings.isolation.gravity_sign, GravitySign::Add);
    /// assert_eq!(settings.attitude.scale, 1e-5);
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let settings: PipelineSettings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&contents)?;
        info!(?path, ?settings, "Loaded pipeline config");
        Ok(settings)
    }
}
