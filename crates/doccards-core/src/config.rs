use crate::{DocCardsError, DocCardsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where downloaded card files are written.
    pub download_dir: Option<PathBuf>,
    /// Start with the three demo cards instead of an empty collection.
    pub seed_cards: bool,
    pub banner_ttl_secs: u64,
    pub history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            seed_cards: true,
            banner_ttl_secs: 3,
            history_limit: 50,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/doccards/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("doccards/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("doccards\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config location, falling back to defaults when
    /// the file is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Load an explicitly requested file. Unlike [`AppConfig::load`], errors
    /// are reported.
    pub fn load_from(path: &Path) -> DocCardsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| DocCardsError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn effective_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn banner_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.banner_ttl_secs)
    }
}
