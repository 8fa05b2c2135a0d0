use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub frontend: FrontendConfig,
    #[serde(default)]
    pub install: InstallConfig,
}

/// Front-end display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Locale used to resolve row titles and descriptions
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Menu the settings browser opens at
    #[serde(default = "default_start_menu")]
    pub start_menu: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            start_menu: default_start_menu(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_start_menu() -> String {
    "root".to_string()
}

/// Install result handling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Reject unknown result codes instead of reading them as success
    #[serde(default)]
    pub strict_codes: bool,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "ember", "Ember")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Read a value by dotted key (e.g. "frontend.locale")
    pub fn get(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["frontend", "locale"] => Ok(self.frontend.locale.clone()),
            ["frontend", "start_menu"] => Ok(self.frontend.start_menu.clone()),
            ["install", "strict_codes"] => Ok(self.install.strict_codes.to_string()),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
    }

    /// Set a value by dotted key. Values are parsed to the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["frontend", "locale"] => {
                self.frontend.locale = value.to_string();
            }
            ["frontend", "start_menu"] => {
                self.frontend.start_menu = value.to_string();
            }
            ["install", "strict_codes"] => {
                self.install.strict_codes = value
                    .parse()
                    .with_context(|| format!("Expected true or false, got {:?}", value))?;
            }
            _ => anyhow::bail!("Unknown config key: {}", key),
        }

        Ok(())
    }
}
