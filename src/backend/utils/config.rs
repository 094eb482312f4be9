use crate::backend::utils::paths::{get_app_dir, get_config_path};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowSettings,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Relative paths resolve against the app directory.
    pub session_file: PathBuf,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Hire AI".to_string(),
            width: 1280,
            height: 832,
            resizable: true,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from("session.json"),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&get_config_path())
    }

    /// Loads the config at `path`. A missing or malformed file yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config found at {}, writing defaults", path.display());
            let config = Self::default();
            if let Err(e) = config.save(path) {
                log::warn!("Failed to write default config: {e}");
            }
            return config;
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config {}: {e:#}, using defaults", path.display());
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content).context("parsing config")?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Where the signed-in session is persisted.
    pub fn session_path(&self) -> PathBuf {
        let file = &self.auth.session_file;
        if file.is_absolute() {
            return file.clone();
        }
        get_app_dir()
            .unwrap_or_else(|_| PathBuf::from("HireAI"))
            .join(file)
    }
}
