//! Application configuration management.
//!
//! This module handles loading and saving the configuration shared by the
//! extractor and the document store: the workbook input path, the generated
//! document output path, and the site base URL for remote fetches.
//!
//! Configuration is stored at `~/.config/stratfu/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "stratfu";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Workbook the extractor reads when no override is configured.
const DEFAULT_SOURCE_XLSX: &str = "assets/stratfu-src.xlsx";

/// Where the extractor writes the document when no override is configured.
const DEFAULT_OUTPUT_JSON: &str = "public/data/dungeons.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub source_xlsx: Option<PathBuf>,
    pub output_json: Option<PathBuf>,
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn source_path(&self) -> PathBuf {
        self.source_xlsx
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_XLSX))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_json
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_JSON))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.source_path(), PathBuf::from("assets/stratfu-src.xlsx"));
        assert_eq!(
            config.output_path(),
            PathBuf::from("public/data/dungeons.json")
        );
    }

    #[test]
    fn test_overrides_win() {
        let config = Config {
            source_xlsx: Some(PathBuf::from("/tmp/in.xlsx")),
            output_json: Some(PathBuf::from("/tmp/out.json")),
            base_url: None,
        };
        assert_eq!(config.source_path(), PathBuf::from("/tmp/in.xlsx"));
        assert_eq!(config.output_path(), PathBuf::from("/tmp/out.json"));
    }
}
