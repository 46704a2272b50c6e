use crate::file::shred::{DEFAULT_CHUNK_SIZE, DEFAULT_PASSES, MAX_CHUNK_SIZE};
use crate::path::DEFAULT_HOME_ENV_VAR;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration (saved to config/settings.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shred: ShredConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShredConfig {
    #[serde(default = "default_passes")]
    pub passes: u32,
    /// Size in bytes of the random buffer written per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_true")]
    pub sync_each_pass: bool,
    /// Give up waiting on a shred after this many seconds (CLI only)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_passes() -> u32 {
    DEFAULT_PASSES
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for ShredConfig {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            chunk_size: DEFAULT_CHUNK_SIZE,
            sync_each_pass: true,
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Environment variable that overrides the home directory for `~`
    #[serde(default = "default_home_env_var")]
    pub home_env_var: String,
}

fn default_home_env_var() -> String {
    DEFAULT_HOME_ENV_VAR.to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            home_env_var: default_home_env_var(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Option<tracing::Level> {
        self.level.parse().ok()
    }
}

impl Config {
    /// Load settings.toml from the config directory, falling back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let config_path = crate::util::paths::get_app_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            tracing::info!("Config not found at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .context(format!("Failed to read {:?}", config_path))?;
        let config: Config = toml::from_str(&content)
            .context(format!("Failed to parse {:?}", config_path))?;
        config.validate()?;

        tracing::debug!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = crate::util::paths::get_app_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;

        // Atomic write using temp file + rename
        let temp_path = config_path.with_extension("toml.tmp");
        std::fs::write(&temp_path, &content).context("Failed to write temp config file")?;
        std::fs::rename(&temp_path, config_path).context("Failed to rename temp config file")?;

        tracing::info!("Saved config to {:?}", config_path);
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let mut errors = Vec::new();

        if self.shred.passes == 0 {
            errors.push("shred.passes must be at least 1".to_string());
        }
        if self.shred.chunk_size == 0 {
            errors.push("shred.chunk_size must be at least 1".to_string());
        }
        if self.shred.chunk_size > MAX_CHUNK_SIZE {
            errors.push(format!("shred.chunk_size must be at most {}", MAX_CHUNK_SIZE));
        }
        if self.shred.timeout_secs == Some(0) {
            errors.push("shred.timeout_secs must be at least 1 when set".to_string());
        }
        if self.paths.home_env_var.is_empty() {
            errors.push("paths.home_env_var must not be empty".to_string());
        }
        if self.logging.level_filter().is_none() {
            errors.push(format!("logging.level {:?} is not a valid level", self.logging.level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Invalid config: {}", errors.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.shred.passes, 3);
        assert_eq!(config.shred.chunk_size, 4096);
        assert!(config.shred.sync_each_pass);
        assert_eq!(config.paths.home_env_var, "FSUTIL_HOMEDIR");
        assert_eq!(config.logging.level_filter(), Some(tracing::Level::INFO));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[shred]\npasses = 8\n").unwrap();
        assert_eq!(config.shred.passes, 8);
        assert_eq!(config.shred.chunk_size, 4096);
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");

        let mut config = Config::default();
        config.shred.passes = 5;
        config.shred.timeout_secs = Some(30);
        config.paths.home_env_var = "VAULT_HOMEDIR".to_string();
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("settings.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_rejects_zero_passes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "[shred]\npasses = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("shred.passes"));
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "TRACE".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_chunk_size_ceiling() {
        let mut config = Config::default();
        config.shred.chunk_size = MAX_CHUNK_SIZE;
        assert!(config.validate().is_ok());

        config.shred.chunk_size = MAX_CHUNK_SIZE + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("shred.chunk_size must be at most"));
    }
}
