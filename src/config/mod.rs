use crate::console::VerbosityLevel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

mod error;
pub use error::{ConfigError, ConfigResult};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub verbosity: Option<String>,
    /// Path to a content profile (TOML) replacing the built-in portfolio
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbosity: None,
            content: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            let config = Self::default();
            config.save()?;
            config
        };

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, content).context("Failed to write config file")
    }

    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDirectory)?;
        Ok(base.join("folio").join("config.toml"))
    }

    pub fn get_verbosity(&self) -> VerbosityLevel {
        self.verbosity
            .as_deref()
            .and_then(VerbosityLevel::parse)
            .unwrap_or_default()
    }

    pub fn set_value(&mut self, key: &str, value: String) -> ConfigResult<()> {
        match key {
            "verbosity" => {
                if VerbosityLevel::parse(&value).is_none() {
                    return Err(ConfigError::InvalidValue {
                        field: "verbosity".to_string(),
                        value,
                    });
                }
                self.verbosity = Some(value);
            }
            "content" => {
                self.content = Some(value);
            }
            "tick_rate_ms" => {
                let rate: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "tick_rate_ms".to_string(),
                    value,
                })?;
                self.tick_rate_ms = rate;
            }
            _ => {
                return Err(ConfigError::UnknownConfigKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
