use super::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// `~/.digiktav/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Ok(home.join(".digiktav").join("config.toml"))
    }

    pub fn load_or_init() -> Result<Self> {
        Self::load_or_init_at(&Self::default_path()?)
    }

    /// Load `config_path`, writing a default config there first if it does
    /// not exist yet.
    pub fn load_or_init_at(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return Self::load_from(config_path);
        }

        if let Some(dir) = config_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .map_err(ConfigError::Io)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let config = Self {
            config_path: config_path.to_path_buf(),
            ..Self::default()
        };
        config.validate()?;
        config.save()?;
        tracing::debug!(path = %config_path.display(), "wrote default config");
        Ok(config)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(config_path)
            .map_err(ConfigError::Io)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(e.to_string()))
            .context("Failed to parse config file")?;
        config.config_path = config_path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str)
            .map_err(ConfigError::Io)
            .context("Failed to write config file")?;
        Ok(())
    }
}
