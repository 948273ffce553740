use crate::rules::FruitRule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub show_scores: bool,
    pub show_recommendations: bool,
}

/// Optional rule overrides. When `fruit_rules` is present it replaces the
/// built-in fruit adjustment table wholesale, so deployments can tune
/// adjustments without rebuilding.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    pub fruit_rules: Option<Vec<FruitRule>>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_scores: true,
            show_recommendations: true,
        }
    }
}

impl CliConfig {
    pub fn load() -> Self {
        // Try to load from config file, fallback to default
        if let Some(config_path) = Self::config_file_path()
            && let Ok(content) = std::fs::read_to_string(config_path)
            && let Ok(config) = toml::from_str(&content)
        {
            return config;
        }
        Self::default()
    }

    pub fn load_from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("freshsense");
            path.push("config.toml");
            path
        })
    }
}
