//! Configuration management for the vlsm CLI

use crate::export::ReportFormat;
use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Report format printed to stdout when `--format` is not given
    pub default_format: ReportFormat,

    /// Color output
    pub color: bool,
}

impl CliConfig {
    /// Load configuration from `path`, or from the default location
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Get the default config path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vlsm").join("config.toml"))
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_format: ReportFormat::Table,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.default_format, ReportFormat::Table);
        assert!(config.color);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = CliConfig {
            default_format: ReportFormat::Csv,
            color: false,
        };
        config.save(&path).unwrap();

        let loaded = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "color = false\n").unwrap();

        let loaded = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.default_format, ReportFormat::Table);
        assert!(!loaded.color);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let result = CliConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_format = \"yaml\"\n").unwrap();

        assert!(matches!(
            CliConfig::load(Some(&path)),
            Err(CliError::Config(_))
        ));
    }
}
