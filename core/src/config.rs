//! Application configuration persisted with confy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timers::DEFAULT_STALE_GRACE_SECS;

const APP_NAME: &str = "tickboard";
const CONFIG_NAME: &str = "config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

/// Display surface options, passed through to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub rows: u32,
    pub cols: u32,
    pub brightness: u8,
    /// Disable to hold a steady colon instead of the half-second flash.
    pub flash_colon: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 64,
            brightness: 100,
            flash_colon: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seconds past expiry during which a finished timer is still shown.
    pub stale_grace_secs: f64,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stale_grace_secs: DEFAULT_STALE_GRACE_SECS,
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}
