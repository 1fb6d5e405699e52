use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::normalize::NormalizeRules;
use crate::scanner::ScanOptions;

pub const CONFIG_FILE_NAME: &str = ".filenorm.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeRules,

    #[serde(default)]
    pub scan: ScanOptions,
}

impl Config {
    /// Load config from .filenorm.toml in the current directory if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.normalize, NormalizeRules::default());
        assert!(config.normalize.lowercase);
        assert!(!config.scan.include_hidden);
    }

    #[test]
    fn test_load_save_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.normalize.lowercase = false;
        config.scan.include_hidden = true;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert!(!loaded.normalize.lowercase);
        assert!(loaded.normalize.replace_spaces);
        assert!(loaded.scan.include_hidden);
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
[normalize]
remove_hyphens = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(!config.normalize.remove_hyphens);
        // Other fields should have their defaults
        assert!(config.normalize.replace_spaces);
        assert!(config.normalize.lowercase);
        assert!(config.normalize.trim_underscores);
        assert!(!config.scan.include_hidden);
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[normalize]\nlowercase = \"sometimes\"\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
