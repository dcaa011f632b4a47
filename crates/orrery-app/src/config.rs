//! Host configuration, loaded from an optional JSON file.
//!
//! Every field has a default, so `{}` and a missing file path are both valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use orrery_core::constants::TICK_RATE;
use orrery_sim::SceneConfig;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scene: SceneConfig,
    /// Target frames per second of the loop.
    pub frame_rate: u32,
    /// Emit a frame snapshot every N frames (1 = every frame).
    pub emit_every_frames: u32,
    /// Stop after this many frames; run until shut down if `None`.
    pub max_frames: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            frame_rate: TICK_RATE,
            emit_every_frames: 1,
            max_frames: None,
        }
    }
}

impl AppConfig {
    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
