use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::render::DisplayMode;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output lines, excluding the total row
    pub lines: usize,
    /// Output format: tree, flat, parseable, json
    pub format: DisplayMode,
    /// Label of the final total row
    pub total_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Usage reporter binary
    pub du_command: String,
    /// Stay on one filesystem
    pub one_file_system: bool,
    /// Apparent byte sizes instead of block usage
    pub apparent_size: bool,
    /// Over-acquisition factor: the candidate pool holds
    /// (lines + 1) * scan_factor entries
    pub scan_factor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            lines: 20,
            format: DisplayMode::Tree,
            total_label: "total".to_string(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            du_command: "du".to_string(),
            one_file_system: false,
            apparent_size: false,
            scan_factor: 10,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location if one exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("duscope").join("config.toml"))
    }

    fn read_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.display.lines < 1 {
            return Err(ConfigError::Invalid("display.lines must be at least 1".into()));
        }
        if self.source.scan_factor < 1 {
            return Err(ConfigError::Invalid(
                "source.scan_factor must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
