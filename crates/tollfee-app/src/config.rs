//! Configuration management for tollfee
//!
//! Config stored at: ~/.config/tollfee/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tollfee_types::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tariff file to load instead of the reference tariff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tariff_file: Option<PathBuf>,

    /// Treat Saturdays and Sundays as toll-free
    #[serde(default = "default_true")]
    pub weekends_toll_free: bool,

    /// Tracing filter directive (e.g. "info", "tollfee_domain=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tariff_file: None,
            weekends_toll_free: true,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tollfee");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the user config dir, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or create default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tollfee Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Tariff file:       {}",
            self.tariff_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(reference tariff)".to_string())
        )?;
        writeln!(f, "Weekends toll-free: {}", self.weekends_toll_free)?;
        writeln!(f, "Log filter:        {}", self.log_filter)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tollfee_types::Error;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            tariff_file: Some(PathBuf::from("/etc/tollfee/gothenburg.toml")),
            weekends_toll_free: false,
            log_filter: "debug".to_string(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "weekends_toll_free = false\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(!config.weekends_toll_free);
        assert_eq!(config.log_filter, "info");
        assert!(config.tariff_file.is_none());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "weekends_toll_free = \"sometimes\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_display() {
        let text = Config::default().to_string();
        assert!(text.contains("(reference tariff)"));
        assert!(text.contains("Log filter"));
    }
}
