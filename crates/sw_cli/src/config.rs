//! Process configuration, read once at startup and passed down by value to
//! every component. No global state.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use sw_core::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteCredentials,
    pub notification: NotificationConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub webdriver_url: Option<String>,
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    #[serde(default)]
    pub archive_dir: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

#[derive(Clone, Deserialize)]
pub struct SiteCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SiteCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Deserialize)]
pub struct NotificationConfig {
    pub api_key: String,
}

impl fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_dest_lang")]
    pub dest_lang: String,
    /// Character bound per remote call; must stay below the service's hard
    /// limit of 5000.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            dest_lang: default_dest_lang(),
            chunk_size: default_chunk_size(),
        }
    }
}

fn default_source_lang() -> String {
    "nl".to_string()
}

fn default_dest_lang() -> String {
    "en".to_string()
}

fn default_chunk_size() -> usize {
    4900
}
