use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIME_URL: &str = "https://worldtimeapi.org/api/timezone/Etc/UTC";
pub const DEFAULT_ICON_URL: &str = "https://openweathermap.org/img/wn";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// time_url = "https://worldtimeapi.org/api/timezone/Etc/UTC"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,
    /// Current-weather endpoint, queried with `lat`, `lon` and `appid`.
    pub weather_url: String,
    /// Endpoint returning `utc_datetime`.
    pub time_url: String,
    /// Base location of weather icons.
    pub icon_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            time_url: DEFAULT_TIME_URL.to_string(),
            icon_url: DEFAULT_ICON_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "geoweather", "geoweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_endpoints() {
        let cfg = Config::default();

        assert_eq!(cfg.weather_url, DEFAULT_WEATHER_URL);
        assert_eq!(cfg.time_url, DEFAULT_TIME_URL);
        assert!(!cfg.is_configured());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml("api_key = \"KEY\"\n").expect("valid toml");

        assert!(cfg.is_configured());
        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
        assert_eq!(cfg.icon_url, DEFAULT_ICON_URL);
    }

    #[test]
    fn toml_roundtrip_keeps_overrides() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.time_url = "http://localhost:9000/utc".into();

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn empty_key_is_not_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key(String::new());

        assert!(!cfg.is_configured());
    }
}
