//! Config file handling

use std::path::{Path, PathBuf};

use crate::errors::{PulseAuthError, Result};

/// Selection policy knobs, read from the `[auth]` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Consider Basic challenges at all
    pub allow_basic: bool,
    /// Skip Digest challenges lacking realm or nonce
    pub prefer_usable_digest: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            allow_basic: true,
            prefer_usable_digest: false,
        }
    }
}

impl SelectorConfig {
    /// Load from `<config dir>/pulse-auth/config.toml`, or defaults if absent
    pub fn load() -> Result<Self> {
        let config_file = Self::default_config_dir().join("config.toml");

        if !config_file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Load from an explicit TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| PulseAuthError::Config(format!("Invalid config TOML: {}", e)))?;

        let defaults = Self::default();
        let section = match toml_value.get("auth") {
            Some(section) => section,
            None => return Ok(defaults),
        };

        Ok(Self {
            allow_basic: Self::parse_bool(section, "allow_basic")?.unwrap_or(defaults.allow_basic),
            prefer_usable_digest: Self::parse_bool(section, "prefer_usable_digest")?
                .unwrap_or(defaults.prefer_usable_digest),
        })
    }

    fn parse_bool(section: &toml::Value, key: &str) -> Result<Option<bool>> {
        match section.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| PulseAuthError::Config(format!("auth.{} must be a boolean", key))),
        }
    }

    /// Get the default config directory
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("pulse-auth"))
            .unwrap_or_else(|| PathBuf::from(".pulse-auth"))
    }
}
