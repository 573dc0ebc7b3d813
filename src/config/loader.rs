//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `.userview.toml` in the working directory
//! 4. `~/.config/userview/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::constants::{self, DEFAULT_BASE_URL, DEFAULT_TICK};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("tick interval must be at least 1 ms")]
    ZeroTick,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub view: ViewConfig,
}

/// Where user records are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Milliseconds between elapsed-counter ticks.
    pub tick_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK.as_millis() as u64,
        }
    }
}

/// One config file as written: only the keys it actually sets.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    endpoint: EndpointLayer,
    view: ViewLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EndpointLayer {
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ViewLayer {
    tick_ms: Option<u64>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.userview.toml` under `work_dir`,
    /// then applies environment overrides and validates the result.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        let local = work_dir.map(|dir| dir.join(constants::CONFIG_FILENAME));
        Self::load_layers(global.as_deref(), local.as_deref(), env)
    }

    /// Layered load from explicit file locations. Missing files are skipped.
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                let layer = Self::load_file(path)?;
                config.merge(layer);
            }
        }

        config.apply_env_vars(env);
        config.validate()?;
        Ok(config)
    }

    /// Load a config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this one. Every key the layer sets wins,
    /// even when it spells out the built-in default.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(base_url) = layer.endpoint.base_url {
            self.endpoint.base_url = base_url;
        }
        if let Some(tick_ms) = layer.view.tick_ms {
            self.view.tick_ms = tick_ms;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(constants::ENV_BASE_URL) {
            self.endpoint.base_url = val;
        }
        if let Some(val) = env.get(constants::ENV_TICK_MS) {
            match val.trim().parse::<u64>() {
                Ok(ms) => self.view.tick_ms = ms,
                Err(_) => warn!("ignoring invalid {} value: {val}", constants::ENV_TICK_MS),
            }
        }
    }

    /// Override the base URL (CLI flag layer).
    pub fn set_base_url(&mut self, url: impl Into<String>) -> Result<(), ConfigError> {
        self.endpoint.base_url = url.into();
        self.validate()
    }

    /// Override the tick interval (CLI flag layer).
    pub fn set_tick_ms(&mut self, ms: u64) -> Result<(), ConfigError> {
        self.view.tick_ms = ms;
        self.validate()
    }

    /// Check that the base URL is an absolute http(s) URL and the tick is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let raw = &self.endpoint.base_url;
        let parsed = reqwest::Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.clone(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }
        if self.view.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    /// Tick period as a [`Duration`].
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.view.tick_ms)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
