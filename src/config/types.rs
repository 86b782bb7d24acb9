use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::enhance::EnhancementOptions;
use crate::error::ConfigError;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Log filter level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub image: ImageConfig,

    /// Options used when no stage flag is passed on the command line
    #[serde(default)]
    pub enhancement: EnhancementOptions,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            log_level: default_log_level(),
            backend: BackendConfig::default(),
            image: ImageConfig::default(),
            enhancement: EnhancementOptions::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.backend.validate()?;
        self.image.validate()?;
        self.tracing_level()?;
        Ok(())
    }

    pub fn tracing_level(&self) -> Result<Level> {
        Level::from_str(self.log_level.trim()).map_err(|_| {
            ConfigError::Validation(format!("unknown log_level {:?}", self.log_level)).into()
        })
    }
}

// ── Enhancement backend ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the enhancement service (default: http://localhost:8000)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Whole-request timeout; model calls can be slow (default: 120)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Timeout for handwriting recognition uploads (default: 600)
    #[serde(default = "default_ocr_timeout_secs")]
    pub ocr_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:8000".into()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_ocr_timeout_secs() -> u64 {
    600
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            ocr_timeout_secs: default_ocr_timeout_secs(),
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(self.api_url.trim()).map_err(|e| {
            ConfigError::Validation(format!("backend.api_url {:?}: {e}", self.api_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(ConfigError::Validation(format!(
                "backend.api_url must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 || self.ocr_timeout_secs == 0
        {
            bail!(ConfigError::Validation(
                "backend timeouts must be greater than zero".into()
            ));
        }
        Ok(())
    }

    /// Join `path` onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// ── Image compression ────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Target size after compression (default: 800)
    #[serde(default = "default_max_size_kb")]
    pub max_size_kb: u32,
    /// Longest edge in pixels after compression (default: 1200)
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_max_size_kb() -> u32 {
    800
}

fn default_max_dimension() -> u32 {
    1200
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_size_kb: default_max_size_kb(),
            max_dimension: default_max_dimension(),
        }
    }
}

impl ImageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_size_kb == 0 || self.max_dimension == 0 {
            bail!(ConfigError::Validation(
                "image.max_size_kb and image.max_dimension must be greater than zero".into()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::TranslationStyle;

    #[test]
    fn defaults_validate() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.backend.api_url, "http://localhost:8000");
        assert_eq!(config.backend.timeout_secs, 120);
        assert_eq!(config.backend.ocr_timeout_secs, 600);
        assert_eq!(config.image.max_size_kb, 800);
        assert_eq!(config.image.max_dimension, 1200);
        assert_eq!(config.tracing_level().unwrap(), Level::INFO);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            api_url = "https://enhance.example.com"

            [enhancement]
            enableTranslation = true
            translationStyle = "formal"
            summaryLength = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.api_url, "https://enhance.example.com");
        assert_eq!(config.backend.connect_timeout_secs, 10);
        assert!(config.enhancement.enable_translation);
        assert_eq!(
            config.enhancement.translation_style,
            TranslationStyle::Formal
        );
        assert_eq!(config.enhancement.summary_length, 35);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn rejects_non_http_url() {
        let backend = BackendConfig {
            api_url: "ftp://example.com".into(),
            ..BackendConfig::default()
        };
        let err = backend.validate().unwrap_err().to_string();
        assert!(err.contains("http or https"));
    }

    #[test]
    fn rejects_unparseable_url() {
        let backend = BackendConfig {
            api_url: "not a url".into(),
            ..BackendConfig::default()
        };
        assert!(backend.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let backend = BackendConfig {
            timeout_secs: 0,
            ..BackendConfig::default()
        };
        assert!(backend.validate().is_err());
    }

    #[test]
    fn rejects_zero_ocr_timeout() {
        let backend = BackendConfig {
            ocr_timeout_secs: 0,
            ..BackendConfig::default()
        };
        assert!(backend.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_joins_cleanly() {
        let backend = BackendConfig {
            api_url: "http://localhost:8000/".into(),
            ..BackendConfig::default()
        };
        assert_eq!(
            backend.endpoint("/enhance-text/"),
            "http://localhost:8000/enhance-text/"
        );
        assert_eq!(
            BackendConfig::default().endpoint("compress-image/"),
            "http://localhost:8000/compress-image/"
        );
    }
}
