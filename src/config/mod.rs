// Configuration for push-sounds
// Optional TOML file in the user config dir; missing file means defaults.
// Never written by the tool - a git hook shouldn't be creating files.

use crate::library::default_location;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_LIBRARY: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub library_base: Option<PathBuf>,
    pub libraries: Vec<String>,
    pub volume: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_base: None,
            libraries: vec![DEFAULT_LIBRARY.to_string()],
            volume: 1.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("unable to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Flag/env value wins, then the config file, then the OS default
    pub fn resolve_library_base(&self, from_cli: Option<PathBuf>) -> PathBuf {
        from_cli
            .or_else(|| self.library_base.clone())
            .unwrap_or_else(default_location)
    }

    /// Libraries to draw from when the user didn't name any
    pub fn effective_libraries(&self, from_cli: &[String]) -> Vec<String> {
        if !from_cli.is_empty() {
            return from_cli.to_vec();
        }
        if !self.libraries.is_empty() {
            return self.libraries.clone();
        }
        vec![DEFAULT_LIBRARY.to_string()]
    }

    pub fn effective_volume(&self, from_cli: Option<f32>) -> f32 {
        from_cli.unwrap_or(self.volume).clamp(0.0, 1.0)
    }

    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("push-sounds").join("config.toml"))
    }
}
