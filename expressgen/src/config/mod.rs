//! Configuration management for expressgen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `EXPRESSGEN_` prefix, `__` for nesting)
//! 2. An explicit file, or `./expressgen.toml`
//! 3. `~/.config/expressgen/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # expressgen.toml
//! [templates]
//! types = "src/types/types.ts"
//! enums = "src/types/enums.ts"
//! routes = "src/routes/index.ts"
//!
//! [logging]
//! format = "compact"
//! filter = "info"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Template locations, relative to the generated `dist` tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatePaths {
    /// Interface declarations template
    pub types: PathBuf,

    /// Enum declarations template
    pub enums: PathBuf,

    /// Router index template
    pub routes: PathBuf,
}

impl Default for TemplatePaths {
    fn default() -> Self {
        Self {
            types: PathBuf::from("src/types/types.ts"),
            enums: PathBuf::from("src/types/enums.ts"),
            routes: PathBuf::from("src/routes/index.ts"),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Output format
    pub format: LogFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Complete expressgen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressGenConfig {
    /// Template locations
    #[serde(default)]
    pub templates: TemplatePaths,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ExpressGenConfig {
    /// Load configuration from every source
    ///
    /// `explicit` replaces `./expressgen.toml` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file contains invalid TOML
    /// - A value fails type conversion
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| ScaffoldError::Config(e.to_string()))?;

        let mut figment = Figment::new().merge(Toml::string(&defaults));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = explicit.map_or_else(|| PathBuf::from("./expressgen.toml"), Path::to_path_buf);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        } else if explicit.is_some() {
            return Err(ScaffoldError::Config(format!(
                "config file not found: {}",
                local_config.display()
            )));
        }

        figment = figment.merge(Env::prefixed("EXPRESSGEN_").split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// Load configuration from a specific file, without the user config
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value fails
    /// type conversion.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| ScaffoldError::Config(e.to_string()))?;

        let config = Figment::new()
            .merge(Toml::string(&defaults))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("EXPRESSGEN_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// The XDG user config path
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./expressgen.toml"),
            |config_dir| config_dir.join("expressgen").join("config.toml"),
        )
    }
}
