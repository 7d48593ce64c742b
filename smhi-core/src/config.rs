use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    codes::Locale,
    model::Coordinates,
    provider::{ClientSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT},
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// locale = "en-US"
/// timezone = "Europe/Stockholm"
///
/// [default_location]
/// lon = 18.0686
/// lat = 59.3293
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Used when no coordinates are given on the command line.
    pub default_location: Option<Coordinates>,

    /// "sv-SE" or "en-US".
    pub locale: Option<String>,

    /// IANA time zone used when printing timestamps.
    pub timezone: Option<String>,

    /// Override for the SMHI endpoint, mostly useful for testing.
    pub base_url: Option<String>,

    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Return the configured default location.
    pub fn default_location(&self) -> Result<Coordinates> {
        self.default_location.ok_or_else(|| {
            anyhow!(
                "No location given and no default location configured.\n\
                 Hint: pass `--lon` and `--lat`, or run `smhi configure` first."
            )
        })
    }

    pub fn set_default_location(&mut self, location: Coordinates) {
        self.default_location = Some(location);
    }

    /// Configured locale, falling back to Swedish.
    pub fn locale(&self) -> Result<Locale> {
        match &self.locale {
            Some(s) => s.parse(),
            None => Ok(Locale::default()),
        }
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("se", "smhi-client", "smhi")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
