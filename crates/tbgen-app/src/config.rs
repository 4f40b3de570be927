//! Settings loaded from the platform config directory
//!
//! `~/.config/tbgen/config.toml` (or the platform equivalent), all fields
//! optional with serde defaults:
//!
//! ```toml
//! [server]
//! base_url = "http://127.0.0.1:8000"
//!
//! [generation]
//! max_retries = 3
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tbgen_core::prelude::*;

/// Default address of the generation service
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Default repair-retry budget forwarded to the service
pub const DEFAULT_MAX_RETRIES: u32 = 3;

const CONFIG_DIR: &str = "tbgen";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Service root the `/api/*` endpoints hang off
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Forwarded to the service as `max_retries`; the service performs the
    /// retries, the client never does.
    pub max_retries: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub generation: GenerationSettings,
}

impl Settings {
    /// Load settings from the default config path. A missing file yields
    /// defaults; a malformed file is logged and also yields defaults, so a
    /// bad config never blocks startup.
    pub fn load() -> Settings {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(Error::Config { message }) => {
                warn!("ignoring malformed config {}: {message}", path.display());
                Settings::default()
            }
            Err(_) => Settings::default(),
        }
    }

    /// Load settings from an explicit path. Missing file yields defaults;
    /// a parse failure is a `Config` error.
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::config(e.to_string()))
    }

    /// Path of the user config file
    pub fn config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join(CONFIG_DIR).join(CONFIG_FILENAME)
    }
}
