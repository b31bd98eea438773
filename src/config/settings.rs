//! User settings and preferences
//!
//! Manages application settings stored in ~/.vizlite/config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Theme name: "dark" (default) or "light"
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Cap on rendered column width, in terminal cells
    #[serde(default = "default_max_column_width")]
    pub max_column_width: u16,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_max_column_width() -> u16 {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            max_column_width: default_max_column_width(),
        }
    }
}

impl Settings {
    /// Directory holding the config file (~/.vizlite)
    pub fn config_dir() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".vizlite"))
    }
}

/// Load settings from the config file; a missing file means defaults.
pub fn load_settings() -> ConfigResult<Settings> {
    let path = Settings::config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.max_column_width, 40);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let settings: Settings = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.max_column_width, 40);
    }

    #[test]
    fn test_empty_toml_parses() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.theme, "dark");
    }
}
