//! Formatter configuration
//!
//! Two layers: [`Config`] holds project-wide settings, deserializable from
//! TOML and carrying defaults, while [`UnitConfig`] is the immutable
//! per-unit value resolved once when a rewrite session starts. Every
//! session operation reads from its `UnitConfig`; nothing is mutated after
//! construction.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Deserialize;

/// The namespace root used when the host supplies no override.
pub const DEFAULT_GLOBAL_NAME: &str = "es6Globals";

/// The filename sentinel some hosts pass when the unit's origin is unknown.
/// A unit carrying it cannot be mapped to a module segment and is rejected.
pub const UNKNOWN_FILENAME: &str = "unknown";

/// Project-wide formatter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name of the top-level property all rewritten bindings live under
    pub global_name: String,

    /// Base directory against which relative unit filenames are resolved
    pub base_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global_name: DEFAULT_GLOBAL_NAME.to_owned(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Immutable per-unit settings for one rewrite session.
#[derive(Debug, Clone)]
pub struct UnitConfig {
    /// File path of the unit being rewritten
    pub filename: PathBuf,

    /// Name of the top-level property all rewritten bindings live under
    pub global_name: String,

    /// Base directory against which a relative `filename` is resolved
    pub base_dir: PathBuf,
}

impl UnitConfig {
    /// Create a per-unit configuration with default project settings.
    ///
    /// Fails when the filename is absent in spirit: empty, or the host's
    /// `"unknown"` sentinel.
    pub fn new(filename: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(filename, &Config::default())
    }

    /// Create a per-unit configuration from project-wide settings.
    pub fn with_config(filename: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        let filename = filename.into();
        if filename.as_os_str().is_empty() || filename.as_os_str() == UNKNOWN_FILENAME {
            bail!("the globals formatter requires that the unit filename be given");
        }

        Ok(Self {
            filename,
            global_name: config.global_name.clone(),
            base_dir: config.base_dir.clone(),
        })
    }

    /// Override the namespace root name for this unit.
    pub fn with_global_name(mut self, global_name: impl Into<String>) -> Self {
        self.global_name = global_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.global_name, "es6Globals");
        assert_eq!(config.base_dir, PathBuf::from("."));
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml_str("global_name = \"NS\"\nbase_dir = \"/srv/app\"\n")
            .expect("config should parse");
        assert_eq!(config.global_name, "NS");
        assert_eq!(config.base_dir, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        assert!(Config::from_toml_str("namespace = \"NS\"\n").is_err());
    }

    #[test]
    fn test_unit_config_requires_filename() {
        assert!(UnitConfig::new("").is_err());
        assert!(UnitConfig::new(UNKNOWN_FILENAME).is_err());
        assert!(UnitConfig::new("/a/bar.js").is_ok());
    }

    #[test]
    fn test_unit_config_global_name_override() {
        let config = UnitConfig::new("/a/bar.js")
            .expect("filename is valid")
            .with_global_name("NS");
        assert_eq!(config.global_name, "NS");
    }
}
