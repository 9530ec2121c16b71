use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User configuration, read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults when the file does not exist
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        tracing::info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    /// Serialize the effective configuration
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Resolve the theme. `--no-colors`/`NO_COLOR` wins over `--theme`,
    /// which wins over the config file.
    pub fn resolve_theme(&self, cli_theme: Option<&str>, no_colors: bool) -> ThemeType {
        if no_colors {
            return ThemeType::NoColor;
        }
        cli_theme
            .unwrap_or(self.theme.as_str())
            .parse::<ThemeType>()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeymapPreset;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.keymap.preset, KeymapPreset::Standard);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[keymap]\npreset = \"emacs\"\n").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.keymap.preset, KeymapPreset::Emacs);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "theme = [").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_resolve_theme_precedence() {
        let config = Config {
            theme: "light".to_string(),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme(None, false), ThemeType::Light);
        assert_eq!(config.resolve_theme(Some("dark"), false), ThemeType::Dark);
        assert_eq!(config.resolve_theme(Some("dark"), true), ThemeType::NoColor);
    }

    #[test]
    fn test_to_toml_round_trips_preset() {
        let mut config = Config::default();
        config.keymap.preset = KeymapPreset::Vim;
        let text = config.to_toml_string().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.keymap.preset, KeymapPreset::Vim);
    }
}
