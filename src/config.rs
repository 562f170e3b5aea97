use crate::error::{Result, StdioError};
use crate::style::{ColorMode, Styler};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured color mode
pub const COLOR_ENV: &str = "TANA_STDIO_COLOR";

/// Keys accepted by [`Config::get`] and [`Config::set`]
pub const KEYS: &[&str] = &["color"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// When to emit color: auto, always or never
    #[serde(default)]
    pub color: ColorMode,
}

impl Config {
    /// Get the config file path
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StdioError::Config("Could not determine config directory".to_string()))?
            .join("tana-stdio");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default path, or defaults if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Apply [`COLOR_ENV`] from the process environment
    pub fn apply_env(self) -> Result<Self> {
        let value = env::var(COLOR_ENV).ok();
        self.with_env_override(value.as_deref())
    }

    /// Apply an override value, as read from [`COLOR_ENV`]
    pub fn with_env_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.color = value.parse()?;
            tracing::debug!("{} overrides color mode to {}", COLOR_ENV, self.color);
        }
        Ok(self)
    }

    pub fn styler(&self) -> Styler {
        Styler::from_mode(self.color)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "color" => {
                self.color = value.parse()?;
                Ok(())
            }
            _ => Err(StdioError::Config(format!("Unknown config key: {}", key))),
        }
    }
}
